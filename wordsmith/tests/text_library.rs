//! End-to-end checks of the text library through the engine

use wordsmith::{args, codes, prettify, roman, roman_range, RangeArgs, Value, Wordsmith};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn texts(value: &Value) -> Vec<&str> {
    value
        .as_list()
        .unwrap_or(&[])
        .iter()
        .filter_map(|v| v.as_text())
        .collect()
}

#[test]
fn test_roman_round_trip_through_engine() {
    init_tracing();
    let ws = Wordsmith::with_text_library();
    for n in (1..=3999).step_by(37).chain([1, 4, 9, 40, 90, 400, 900, 3999]) {
        let numeral = ws.call("roman_encode", &args![n]);
        let decoded = ws.call("roman_decode", &[numeral.clone()]);
        assert_eq!(decoded.as_number().and_then(|d| d.to_i64()), Some(n), "{}", numeral);
    }
}

#[test]
fn test_roman_canonical_form() {
    for n in 1..=3999 {
        let numeral = roman::encode(n).unwrap();
        assert!(numeral.chars().all(|c| "IVXLCDM".contains(c)));
        assert_eq!(roman::canonicalize(&numeral).unwrap(), numeral);
        assert_eq!(roman::decode(&numeral.to_lowercase()).unwrap(), n);
    }
}

#[test]
fn test_roman_edges() {
    let ws = Wordsmith::with_text_library();
    assert_eq!(ws.call("roman_encode", &args![3999]).as_text(), Some("MMMCMXCIX"));
    assert_eq!(ws.call("roman_encode", &args!["1"]).as_text(), Some("I"));

    let err = ws.call("roman_encode", &args![0]);
    assert_eq!(err.as_error().unwrap().message, "Input must be >= 1 and <= 3999");

    let err = ws.call("roman_decode", &args![""]);
    assert_eq!(err.as_error().unwrap().message, "Input must be a non empty string");

    let err = ws.call("roman_decode", &args!["wtf?"]);
    assert_eq!(err.as_error().unwrap().message, "Invalid token found: \"?\"");
}

#[test]
fn test_roman_range_through_engine() {
    let ws = Wordsmith::with_text_library();

    let result = ws.call("roman_range", &args![7]);
    assert_eq!(texts(&result), ["I", "II", "III", "IV", "V", "VI", "VII"]);

    let result = ws.call("roman_range", &args![1, 7, -1]);
    assert_eq!(texts(&result), ["VII", "VI", "V", "IV", "III", "II", "I"]);

    let result = ws.call("roman_range", &args![3999, 3999]);
    assert_eq!(texts(&result), ["MMMCMXCIX"]);

    let err = ws.call("roman_range", &args![4000]);
    assert_eq!(err.as_error().unwrap().code, codes::DOMAIN_ERROR);

    let err = ws.call("roman_range", &args![10, 1, 20]);
    assert_eq!(err.as_error().unwrap().code, codes::OVERFLOW);
}

#[test]
fn test_roman_range_is_lazy_and_bounded() {
    let mut range = roman_range(3999, 1, 1).unwrap();
    assert_eq!(range.len(), 3999);
    assert_eq!(range.nth(3998).as_deref(), Some("MMMCMXCIX"));
    assert_eq!(range.next(), None);

    let items: Vec<String> = RangeArgs::new(1).start(3999).step(-1000).build().unwrap().collect();
    assert_eq!(items, ["MMMCMXCIX", "MMCMXCIX", "MCMXCIX", "CMXCIX"]);
}

#[test]
fn test_prettify_through_engine() {
    init_tracing();
    let ws = Wordsmith::with_text_library();
    let result = ws.call(
        "prettify",
        &args![" unprettified string ,, like this one,will be\"prettified\" .it' s awesome!( like python)) "],
    );
    assert_eq!(
        result.as_text(),
        Some("Unprettified string, like this one, will be \"prettified\". It's awesome! (like python)")
    );

    let err = ws.call("prettify", &args![42]);
    assert_eq!(err.as_error().unwrap().code, codes::INVALID_INPUT);
}

#[test]
fn test_prettify_keeps_urls_and_emails_verbatim() {
    let text = "contact : me.here@gmail.com,or see https://www.site.com/path/file.html?x=1,2";
    let pretty = prettify(text);
    assert!(pretty.contains("me.here@gmail.com"));
    assert!(pretty.contains("https://www.site.com/path/file.html?x=1,2"));
    assert!(pretty.starts_with("Contact: "));
}

#[test]
fn test_prettify_idempotent_corpus() {
    let corpus = [
        " unprettified string ,, like this one,will be\"prettified\" .it' s awesome!( like python)) ",
        "mail me at foo@bar.com ,please",
        "the cat' s toy",
        "What?!",
        "Really!?",
        "Wait...!",
        "Done.,then",
        "100%,ok",
        "wait... what?! really??? ok!!! see you at 5 .",
        "is it 100%?! yes, it is... really.",
    ];
    for s in corpus {
        let once = prettify(s);
        assert_eq!(prettify(&once), once, "input: {:?}", s);
    }
}

#[test]
fn test_prettify_adjacent_signs_through_engine() {
    let ws = Wordsmith::with_text_library();
    for (input, expected) in [
        ("What?!", "What?!"),
        ("Wait...!", "Wait...!"),
        ("100%,ok", "100%, ok"),
        ("wait... what?! really??? ok!!!", "Wait... What?! Really??? Ok!!!"),
    ] {
        assert_eq!(ws.call("prettify", &args![input]).as_text(), Some(expected));
    }
}

#[test]
fn test_validation_and_manipulation_mix() {
    let ws = Wordsmith::with_text_library();
    let result = ws.batch(&[
        ("is_email", args!["my.email@the-provider.com"]),
        ("is_url", args!["http://www.mysite.com"]),
        ("is_snake_case", args!["foo_bar_baz"]),
        ("slugify", args!["Top 10 Reasons To Love Dogs!!!"]),
        ("camel_case_to_snake", args!["ThisIsACamelStringTest"]),
        ("is_email", args![Value::Null]),
    ]);
    assert!(result.is_ok());
    assert_eq!(result.values[0].as_bool(), Some(true));
    assert_eq!(result.values[1].as_bool(), Some(true));
    assert_eq!(result.values[2].as_bool(), Some(true));
    assert_eq!(result.values[3].as_text(), Some("top-10-reasons-to-love-dogs"));
    assert_eq!(result.values[4].as_text(), Some("this_is_a_camel_string_test"));
    assert_eq!(result.values[5].as_bool(), Some(false));
}

#[test]
fn test_compress_round_trip_through_engine() {
    let ws = Wordsmith::with_text_library();
    let original = "Lorem ipsum, con caratteri UTF-8 come è, à, ù. ".repeat(10);
    let compressed = ws.call("compress", &args![original.as_str(), 9]);
    assert!(compressed.as_text().unwrap().len() < original.len());
    let restored = ws.call("decompress", &[compressed]);
    assert_eq!(restored.as_text(), Some(original.as_str()));
}
