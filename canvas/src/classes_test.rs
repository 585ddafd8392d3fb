use super::*;

#[test]
fn palette_colors_by_id() {
    assert_eq!(class_color(0), "#FF0000");
    assert_eq!(class_color(1), "#0000FF");
    assert_eq!(class_color(11), "#FFD700");
}

#[test]
fn palette_falls_back_out_of_range() {
    assert_eq!(class_color(12), FALLBACK_COLOR);
    assert_eq!(class_color(u32::MAX), FALLBACK_COLOR);
}

#[test]
fn default_table_has_twelve_classes_in_order() {
    let table = ClassTable::default();
    assert_eq!(table.len(), 12);
    assert_eq!(table.name(0), "person");
    assert_eq!(table.name(7), "boar");
    assert_eq!(table.name(11), "dog");
}

#[test]
fn unknown_id_is_named_unknown() {
    let table = ClassTable::default();
    assert_eq!(table.name(42), UNKNOWN_CLASS);
    assert!(!table.contains(42));
}

#[test]
fn id_of_matches_exact_name() {
    let table = ClassTable::default();
    assert_eq!(table.id_of("truck"), Some(4));
    assert_eq!(table.id_of("Truck"), None);
}

#[test]
fn server_table_decodes_with_extra_fields() {
    let raw = r##"[{"class_id":0,"class_name":"person","color":"#FF0000","auto_detectable":true},
                   {"class_id":1,"class_name":"car","color":"#0000FF","auto_detectable":true}]"##;
    let classes: Vec<ClassInfo> = serde_json::from_str(raw).unwrap();
    let table = ClassTable::new(classes);
    assert_eq!(table.len(), 2);
    assert_eq!(table.name(1), "car");
}
