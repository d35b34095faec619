//! End-to-end tests over the full parse / build / mutate / print pipeline

use jdoc_core::JsonDocument;
use jdoc_syntax::{parse, print_document, print_value};

#[test]
fn test_parse_then_print_compact() {
    let doc = parse(r#"{ "a" : 1 , "b" : [ true , null ] }"#).unwrap();
    assert_eq!(print_document(&doc), r#"{"a":1,"b":[true,null]}"#);
}

#[test]
fn test_empty_document_roundtrip() {
    let doc = parse("{}").unwrap();
    let root = doc.root().unwrap();
    assert_eq!(doc.field_count(root), 0);
    assert_eq!(print_document(&doc), "{}");
}

#[test]
fn test_mixed_scalar_and_composite_document() {
    let doc = parse(r#"{"a":1,"b":2.5,"c":[1,2,3],"d":{"x":true}}"#).unwrap();
    let root = doc.root().unwrap();

    let c = doc.field_value(doc.get_field(root, "c").unwrap());
    let elems = doc.as_array(c).unwrap();
    assert_eq!(elems.len(), 3);
    for (i, &elem) in elems.iter().enumerate() {
        assert_eq!(doc.as_int(elem), Ok(i as i32 + 1));
    }

    let d = doc.field_value(doc.get_field(root, "d").unwrap());
    let inner = doc.as_object(d).unwrap();
    let x = doc.field_value(doc.get_field(inner, "x").unwrap());
    assert_eq!(doc.as_bool(x), Ok(true));
}

/// Build a representative document through the constructor surface
fn build_sample() -> JsonDocument {
    let mut doc = JsonDocument::new();

    let number = doc.value_float(3.14);
    let string = doc.value_string("hello");
    let boolean = doc.value_bool(true);
    let null = doc.value_null();
    let elems: Vec<_> = (1..=3).map(|i| doc.value_int(i)).collect();
    let array = doc.value_array(&elems);

    let child_number = doc.value_int(123);
    let child_string = doc.value_string("foobar");
    let child_bool = doc.value_bool(false);
    let cf1 = doc.field("Number", child_number);
    let cf2 = doc.field("String", child_string);
    let cf3 = doc.field("Boolean", child_bool);
    let child = doc.make_object(&[cf1, cf2, cf3]);
    let child_value = doc.value_object(Some(child));

    let f1 = doc.field("Number", number);
    let f2 = doc.field("String", string);
    let f3 = doc.field("Boolean", boolean);
    let f4 = doc.field("Null", null);
    let f5 = doc.field("Array", array);
    let f6 = doc.field("Child-Object", child_value);
    let root = doc.make_object(&[f1, f2, f3, f4, f5, f6]);
    doc.set_root(root);
    doc
}

#[test]
fn test_built_document_prints_compact() {
    let doc = build_sample();
    assert_eq!(
        print_document(&doc),
        "{\"Number\":3.140000,\"String\":\"hello\",\"Boolean\":true,\"Null\":null,\
         \"Array\":[1,2,3],\"Child-Object\":{\"Number\":123,\"String\":\"foobar\",\"Boolean\":false}}"
    );
}

#[test]
fn test_built_document_roundtrips() {
    let doc = build_sample();
    let reparsed = parse(&print_document(&doc)).unwrap();
    let a = doc.root().unwrap();
    let b = reparsed.root().unwrap();
    assert!(doc.object_eq(a, &reparsed, b));
}

#[test]
fn test_mutation_after_build() {
    let mut doc = build_sample();
    let root = doc.root().unwrap();

    // Overwrite a scalar field's value in place
    let world = doc.value_string("world");
    let string_field = doc.get_field(root, "String").unwrap();
    doc.set_field_value(string_field, world);

    // Reach into the nested object and overwrite there too
    let child_field = doc.get_field(root, "Child-Object").unwrap();
    let child = doc.as_object(doc.field_value(child_field)).unwrap();
    let new_number = doc.value_int(321);
    let number_field = doc.get_field(child, "Number").unwrap();
    doc.set_field_value(number_field, new_number);

    // Grow the root with fresh empty composites
    let empty_object = doc.value_object(None);
    let eo = doc.field("Empty-Object", empty_object);
    doc.put_field(root, eo);
    let empty_array = doc.value_array(&[]);
    let ea = doc.field("Empty-Array", empty_array);
    doc.put_field(root, ea);

    let text = print_document(&doc);
    assert!(text.contains(r#""String":"world""#));
    assert!(text.contains(r#""Number":321"#));
    assert!(text.contains(r#""Empty-Object":{}"#));
    assert!(text.contains(r#""Empty-Array":[]"#));

    // And the mutated document still parses back to an equal tree
    let reparsed = parse(&text).unwrap();
    assert!(doc.object_eq(root, &reparsed, reparsed.root().unwrap()));
}

#[test]
fn test_float_stays_float_across_roundtrip() {
    let mut doc = JsonDocument::new();
    let three = doc.value_float(3.0);
    let f = doc.field("three", three);
    let root = doc.make_object(&[f]);
    doc.set_root(root);

    let reparsed = parse(&print_document(&doc)).unwrap();
    let v = reparsed.field_value(
        reparsed
            .get_field(reparsed.root().unwrap(), "three")
            .unwrap(),
    );
    assert!(reparsed.value(v).is_float());
    assert_eq!(reparsed.as_float(v), Ok(3.0));
}

#[test]
fn test_pretty_output_reparses_equal() {
    let source = r#"{"a":1,"b":[true,{"c":"text"}],"d":{"e":2.5}}"#;
    let mut doc = parse(source).unwrap();
    let root = doc.root().unwrap();
    doc.set_pretty(root, true);

    let pretty = print_document(&doc);
    assert!(pretty.contains('\n'));

    let reparsed = parse(&pretty).unwrap();
    assert!(doc.object_eq(root, &reparsed, reparsed.root().unwrap()));
}

#[test]
fn test_escaped_strings_roundtrip() {
    let mut doc = JsonDocument::new();
    let tricky = doc.value_string("tab\there \"quote\" back\\slash\nnewline");
    let f = doc.field("s", tricky);
    let root = doc.make_object(&[f]);
    doc.set_root(root);

    let reparsed = parse(&print_document(&doc)).unwrap();
    let v = reparsed.field_value(
        reparsed.get_field(reparsed.root().unwrap(), "s").unwrap(),
    );
    assert_eq!(
        reparsed.as_str(v),
        Ok("tab\there \"quote\" back\\slash\nnewline")
    );
}

#[test]
fn test_duplicate_field_quirk_survives_pipeline() {
    let mut doc = JsonDocument::new();
    let first = doc.value_int(1);
    let second = doc.value_int(2);
    let f1 = doc.field("dup", first);
    let f2 = doc.field("dup", second);
    let root = doc.make_object(&[f1, f2]);
    doc.set_root(root);

    // Both fields serialize in insertion order...
    assert_eq!(print_document(&doc), r#"{"dup":1,"dup":2}"#);

    // ...and after reparsing, lookup still returns the most recent
    let reparsed = parse(&print_document(&doc)).unwrap();
    let reroot = reparsed.root().unwrap();
    assert_eq!(reparsed.field_count(reroot), 2);
    let found = reparsed.field_value(reparsed.get_field(reroot, "dup").unwrap());
    assert_eq!(reparsed.as_int(found), Ok(2));
}

#[test]
fn test_print_value_on_parsed_subtree() {
    let doc = parse(r#"{"xs":[1,2.5,"three"]}"#).unwrap();
    let xs = doc.field_value(doc.get_field(doc.root().unwrap(), "xs").unwrap());
    assert_eq!(print_value(&doc, xs), r#"[1,2.500000,"three"]"#);
}

#[test]
fn test_large_document_roundtrip() {
    let mut doc = JsonDocument::new();
    let root = doc.make_object(&[]);
    for i in 0..500 {
        let v = if i % 3 == 0 {
            doc.value_int(i)
        } else if i % 3 == 1 {
            doc.value_float(f64::from(i) / 2.0)
        } else {
            doc.value_string(&format!("value-{i}"))
        };
        let f = doc.field(&format!("field-{i}"), v);
        doc.put_field(root, f);
    }
    doc.set_root(root);

    let reparsed = parse(&print_document(&doc)).unwrap();
    assert!(doc.object_eq(root, &reparsed, reparsed.root().unwrap()));
    assert_eq!(reparsed.field_count(reparsed.root().unwrap()), 500);
}
