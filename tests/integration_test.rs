use field_sanitizer::{
    clear, default_value, ClearArgs, ClearOptions, Field, RawValue, Sanitizer, Tainted, TypeKind,
    Value, Violation,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn clear_json(kind: TypeKind, raw: RawValue) -> Result<Value, Vec<Violation>> {
    clear(kind, Tainted::new(raw), &ClearOptions::new(), false)
        .map(|verified| verified.into_inner())
        .map_err(|violations| violations.into_vec())
}

#[test]
fn excluded_shapes_fail_coercion_only() {
    init_tracing();

    let shapes = [json!(null), json!([]), json!([1, 2]), json!({}), json!({"a": 1})];
    for kind in TypeKind::ALL {
        for raw in &shapes {
            assert_eq!(
                clear_json(kind, raw.clone()),
                Err(vec![Violation::ValueCoercion]),
                "{} {:?}",
                kind,
                raw
            );
        }
    }
    assert_eq!(
        clear_json(TypeKind::String, json!(true)),
        Err(vec![Violation::ValueCoercion])
    );
    assert_eq!(
        clear_json(TypeKind::Integer, json!(false)),
        Err(vec![Violation::ValueCoercion])
    );
}

#[test]
fn float_decimal_comma() {
    assert_eq!(clear_json(TypeKind::Float, json!("3,14")), Ok(Value::Float(3.14)));
    assert_eq!(
        clear_json(TypeKind::Float, json!("abc")),
        Err(vec![Violation::ValueCoercion])
    );
}

#[test]
fn boolean_forms() {
    assert_eq!(clear_json(TypeKind::Boolean, json!("on")), Ok(Value::Bool(true)));
    assert_eq!(clear_json(TypeKind::Boolean, json!("off")), Ok(Value::Bool(false)));
    assert_eq!(
        clear_json(TypeKind::Boolean, json!([])),
        Err(vec![Violation::ValueCoercion])
    );
}

#[test]
fn string_default_bounds() {
    init_tracing();

    assert_eq!(
        clear_json(TypeKind::String, json!("")),
        Err(vec![Violation::MinBound])
    );

    let long = "a".repeat(5001);
    assert_eq!(
        clear_json(TypeKind::String, json!(long)),
        Err(vec![Violation::MaxBound])
    );

    let exact = "a".repeat(5000);
    assert_eq!(
        clear_json(TypeKind::String, json!(exact.clone())),
        Ok(Value::String(exact))
    );
}

#[test]
fn full_pipeline_is_idempotent() {
    let options = ClearOptions::new();
    let input = "  <p class=\"intro\">Caf\u{e9}\r\n\r\n  &amp;\t\"bar\" \u{2014} it's</p>  ";

    let once = clear(TypeKind::String, Tainted::from_text(input), &options, false)
        .expect("valid input")
        .into_inner();
    let text = once.as_str().expect("string value").to_string();
    let twice = clear(TypeKind::String, Tainted::from_text(text), &options, false)
        .expect("already clean")
        .into_inner();

    assert_eq!(once, Value::from("Caf&eacute;\n &amp; &quot;bar&quot; &mdash; it&#039;s"));
    assert_eq!(twice, once);
}

#[test]
fn literal_references_stay_literal() {
    init_tracing();

    let cases = [
        ("&amp;lt;b&amp;gt;x", "&amp;lt;b&amp;gt;x"),
        ("&amp;lt;!-- x", "&amp;lt;!-- x"),
        ("a &amp;lt;i&amp;gt;b", "a &amp;lt;i&amp;gt;b"),
        ("x <b>", "x"),
        ("x <\t", "x &lt;"),
    ];
    for (input, expected) in cases {
        let once = clear_json(TypeKind::String, json!(input));
        assert_eq!(once, Ok(Value::from(expected)), "{input}");
        assert_eq!(clear_json(TypeKind::String, json!(expected)), once, "{input}");
    }
}

#[test]
fn whitespace_collapsing() {
    let options = ClearOptions::new().html_entities(false);
    let cleaned = clear(
        TypeKind::String,
        Tainted::from_text("a\t\tb\n\n\nc   d"),
        &options,
        false,
    )
    .expect("valid input");
    assert_eq!(cleaned.into_inner(), Value::from("a b\nc d"));
}

#[test]
fn allowed_symbols_stop_at_first_offender() {
    let options = ClearOptions::new().allowed_symbols(['a', 'b']);
    let violations = clear(TypeKind::String, Tainted::from_text("abcabc"), &options, false)
        .unwrap_err();
    assert_eq!(violations.as_slice(), &[Violation::AllowedSymbols]);
}

#[test]
fn whitelist_exactness() {
    let options = ClearOptions::new().white_list([5_i64]);
    let verified = clear(TypeKind::Integer, Tainted::from_text("5"), &options, false)
        .expect("5 is listed");
    assert_eq!(verified.into_inner(), Value::Int(5));

    let options = ClearOptions::new().white_list(["5"]);
    let violations =
        clear(TypeKind::Integer, Tainted::from_text("5"), &options, false).unwrap_err();
    assert_eq!(violations.as_slice(), &[Violation::Whitelist]);
}

#[test]
fn soft_mode_transforms_less() {
    let input = "<em>Hello</em>\t\t'world'";
    let options = ClearOptions::new();

    let hard = clear(TypeKind::String, Tainted::from_text(input), &options, false)
        .expect("valid input")
        .into_inner();
    let soft = clear(TypeKind::String, Tainted::from_text(input), &options, true)
        .expect("valid input")
        .into_inner();

    assert_eq!(hard, Value::from("Hello &#039;world&#039;"));
    assert_eq!(soft, Value::from(input));
}

#[test]
fn default_values_per_kind() {
    assert_eq!(default_value(TypeKind::Integer), Value::Int(0));
    assert_eq!(default_value(TypeKind::Float), Value::Float(0.0));
    assert_eq!(default_value(TypeKind::Boolean), Value::Bool(false));
    assert_eq!(default_value(TypeKind::String), Value::from(""));
}

#[test]
fn form_definition_drives_fields() {
    init_tracing();

    let definition = json!({
        "username": { "type": "string", "args": { "_max": 16, "_pcre": "^[a-z][a-z0-9_]*$" } },
        "age": { "type": "int", "args": { "_min": 13, "_max": 120 } },
        "plan": { "type": "string", "args": { "_white_list": ["free", "pro"] } },
        "bio": { "type": "string", "args": { "_min": null } },
    });

    let fields: Vec<Field> = definition
        .as_object()
        .expect("object")
        .iter()
        .map(|(name, entry)| {
            let kind: TypeKind = entry["type"].as_str().expect("label").parse().expect("kind");
            let args: ClearArgs =
                serde_json::from_value(entry["args"].clone()).expect("valid args");
            let options = ClearOptions::try_from(args).expect("valid options");
            Field::new(kind, &options, false).named(name.as_str())
        })
        .collect();
    let field = |name: &str| {
        fields
            .iter()
            .find(|f| f.name() == Some(name))
            .expect("field exists")
    };

    assert!(field("username").sanitize(Tainted::from_text(" alice_1 ")).is_ok());
    assert_eq!(
        field("username")
            .sanitize(Tainted::from_text("1alice"))
            .unwrap_err()
            .as_slice(),
        &[Violation::Pattern]
    );
    assert_eq!(
        field("age").sanitize(Tainted::from_text("12")).unwrap_err().codes(),
        vec!["_min"]
    );
    assert!(field("age").sanitize(Tainted::new(json!(42))).is_ok());
    assert!(field("plan").sanitize(Tainted::from_text("pro")).is_ok());
    assert_eq!(
        field("plan").sanitize(Tainted::from_text("gold")).unwrap_err().first(),
        Violation::Whitelist
    );
    assert!(field("bio").sanitize(Tainted::from_text("")).is_ok());
}

#[test]
fn violations_serialize_for_responses() {
    let violations = clear(
        TypeKind::Integer,
        Tainted::from_text("7"),
        &ClearOptions::new().max(5.0).white_list([1_i64, 2]),
        false,
    )
    .unwrap_err();

    let body = json!({ "success": false, "errors": violations });
    assert_eq!(body["errors"], json!(["_max", "_white_list"]));
}
