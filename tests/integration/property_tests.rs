//! Properties that hold across the whole conversion family

use stringcase::{
    to_camel_case, to_delimited_case, to_kebab_case, to_pascal_case, to_screaming_delimited_case,
    to_screaming_kebab_case, to_screaming_snake_case, to_snake_case, to_snake_case_with_ignore,
    Case, Converter,
};

/// Mixed inputs covering every separator, digits, acronym runs and padding
const CORPUS: &[&str] = &[
    "",
    "   ",
    "test",
    "TEST",
    "test case",
    "testCase",
    "TestCase",
    "test-case",
    "test_case",
    "test.case",
    "TEST_CASE",
    "Test  Case",
    "JSONData",
    "dataJSON",
    "XMLHttpRequest",
    "v2Beta3",
    "v_2_bate_3",
    "user id 42",
    "_privateVar",
    "var_",
    "-optionFlag",
    "  padded value  ",
    "Über straße",
];

/// Inputs whose camel/pascal output contains no single-letter words
const CAMEL_CORPUS: &[&str] = &[
    "",
    "test case",
    "testCase",
    "TestCase",
    "test-case",
    "test_case",
    "TEST_CASE",
    "test.case",
    "JSONData",
    "dataJSON",
    "XMLHttpRequest",
    "v_2_bate_3",
    "user id 42",
    "Über straße",
];

#[test]
fn test_snake_case_is_idempotent() {
    for input in CORPUS {
        let once = to_snake_case(input);
        assert_eq!(to_snake_case(&once), once, "input {input:?}");
    }
}

#[test]
fn test_kebab_case_is_idempotent() {
    for input in CORPUS {
        let once = to_kebab_case(input);
        assert_eq!(to_kebab_case(&once), once, "input {input:?}");
    }
}

#[test]
fn test_camel_and_pascal_are_idempotent() {
    for input in CAMEL_CORPUS {
        let camel = to_camel_case(input);
        assert_eq!(to_camel_case(&camel), camel, "camel input {input:?}");

        let pascal = to_pascal_case(input);
        assert_eq!(to_pascal_case(&pascal), pascal, "pascal input {input:?}");
    }
}

#[test]
fn test_screaming_is_upper_of_plain() {
    for input in CORPUS {
        assert_eq!(
            to_screaming_snake_case(input),
            to_snake_case(input).to_uppercase(),
            "input {input:?}"
        );
        assert_eq!(
            to_screaming_kebab_case(input),
            to_kebab_case(input).to_uppercase(),
            "input {input:?}"
        );
    }
}

#[test]
fn test_delimiter_parametrization() {
    for input in CORPUS {
        assert_eq!(to_delimited_case(input, '_'), to_snake_case(input), "input {input:?}");
        assert_eq!(to_delimited_case(input, '-'), to_kebab_case(input), "input {input:?}");
        assert_eq!(
            to_screaming_delimited_case(input, '_', "", true),
            to_screaming_snake_case(input),
            "input {input:?}"
        );
    }
}

#[test]
fn test_converter_matches_free_functions() {
    for input in CORPUS {
        assert_eq!(Converter::new(Case::Snake).convert(input), to_snake_case(input));
        assert_eq!(Converter::new(Case::Kebab).convert(input), to_kebab_case(input));
        assert_eq!(
            Converter::new(Case::ScreamingKebab).convert(input),
            to_screaming_kebab_case(input)
        );
        assert_eq!(Converter::new(Case::Camel).convert(input), to_camel_case(input));
        assert_eq!(Converter::new(Case::Pascal).convert(input), to_pascal_case(input));
    }
}

#[test]
fn test_empty_and_whitespace_inputs() {
    for input in ["", " ", "\t \n"] {
        assert_eq!(to_camel_case(input), "");
        assert_eq!(to_pascal_case(input), "");
        assert_eq!(to_snake_case(input), "");
        assert_eq!(to_snake_case_with_ignore(input, "_"), "");
        assert_eq!(to_screaming_snake_case(input), "");
        assert_eq!(to_kebab_case(input), "");
        assert_eq!(to_screaming_kebab_case(input), "");
        assert_eq!(to_delimited_case(input, '.'), "");
        assert_eq!(to_screaming_delimited_case(input, '.', "", true), "");
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(to_snake_case("v2Beta3"), "v_2_beta_3");
    assert_eq!(to_snake_case("JSONData"), "json_data");
    assert_eq!(to_snake_case("dataJSON"), "data_json");
    assert_eq!(to_camel_case("TestCase"), "testCase");
    assert_eq!(to_pascal_case("test case"), "TestCase");
    assert_eq!(to_snake_case_with_ignore("test_case", "_"), "test_case");
    assert_eq!(to_kebab_case("test-case"), "test-case");
}

#[test]
fn test_separator_only_inputs() {
    assert_eq!(to_snake_case("__"), "__");
    assert_eq!(to_kebab_case("_._"), "---");
    assert_eq!(to_camel_case("-_."), "");
}

#[test]
fn test_conversions_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("workerNumber{i}");
                (to_snake_case(&input), to_pascal_case(&input))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (snake, pascal) = handle.join().unwrap();
        assert_eq!(snake, format!("worker_number_{i}"));
        assert_eq!(pascal, format!("WorkerNumber{i}"));
    }
}
