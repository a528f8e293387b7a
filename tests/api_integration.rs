//! Integration tests that exercise the public API from the crate root.

use pretty_assertions::assert_eq;
use strkit::{
    Case, DEFAULT_WHITESPACE, MatchPolicy, ParseNumberError, WrapOptions, begin_with, calign,
    capitalize, compare, count, decapitalize, decimal_to_binary_string, end_with, get_ordinal,
    is_abbreviation_of, is_number, lalign, ltrim, parse_number, ralign, replace, replace_inplace,
    rtrim, split, strip, to_double, to_human_size, to_lower, to_number, to_upper, trim, unwrap,
    word_is_among, wrap,
};

#[test]
fn checks() {
    assert!(begin_with("Hello world!", "Hello", Case::Sensitive, 0));
    assert!(begin_with("Hello world!", "hello", Case::Insensitive, 0));
    assert!(begin_with("Hello world!", "Hello", Case::Sensitive, 3));
    assert!(end_with("Hello world!", "world!", Case::Sensitive, 0));
    assert!(end_with("Hello world!", "World!", Case::Insensitive, 0));
    assert!(compare("Hello", "hello", Case::Insensitive, 0));
    assert!(!compare("Hello", "HELLO", Case::Sensitive, 0));
    assert!(compare("cat", "catalog", Case::Insensitive, 3));
    assert_eq!(count("apple orange apple apple", "apple", Case::Insensitive), 3);
    assert_eq!(count("apple orange apple apple", "DOG", Case::Insensitive), 0);
    assert_eq!(count("apple orange apple apple", "apple", Case::Sensitive), 3);
    assert_eq!(count("apple orange apple apple", "Apple", Case::Sensitive), 0);
    assert!(is_abbreviation_of("str", "string", Case::Insensitive, 3));
    assert!(is_abbreviation_of("abc", "abcd", Case::Insensitive, 2));
}

#[test]
fn case_from_bool_flag() {
    assert!(begin_with("Hello", "hel", false.into(), 0));
    assert!(!begin_with("Hello", "hel", true.into(), 0));
}

#[test]
fn manipulation() {
    assert_eq!(trim("_ _-_abc_-_ _", " _-"), "abc");
    assert_eq!(ltrim("_-_ _abc ", " _-"), "abc ");
    assert_eq!(rtrim(" abc_-_ _", " _-"), " abc");
    assert_eq!(to_upper("hello there!"), "HELLO THERE!");
    assert_eq!(to_lower("HELLO THERE!"), "hello there!");
    assert_eq!(ralign("hello", 10, ' '), "     hello");
    assert_eq!(lalign("hello", 10, ' '), "hello     ");
    assert_eq!(calign("hello", 10, ' '), "  hello   ");
    assert_eq!(replace("Hello there!", "there", "friend", 0), "Hello friend!");
    let mut s = String::from("Hello world!");
    replace_inplace(&mut s, "world", "friend", 0);
    assert_eq!(s, "Hello friend!");
    assert_eq!(strip("1,000,000", ','), "1000000");
    assert_eq!(split("a b\tc", " \t"), vec!["a", "b", "c"]);
    assert_eq!(capitalize("hello there friend!", 2), "Hello There friend!");
    assert_eq!(decapitalize("Hello There Friend!", 2), "hello there Friend!");
}

#[test]
fn replace_counted_then_all() {
    let ratio = "the ratio of the ratio";
    assert_eq!(replace(ratio, "ratio", "RATIO", 1), "the RATIO of the ratio");
    let all = replace(ratio, "ratio", "RATIO", 0);
    assert_eq!(all, "the RATIO of the RATIO");
    assert_eq!(replace(&all, "RATIO", "ratio", 0), ratio);
}

#[test]
fn reflow() {
    assert_eq!(wrap("AAAA BBBB CCCC DDDD", 4, DEFAULT_WHITESPACE), "AAAA\nBBBB\nCCCC\nDDDD");
    assert_eq!(unwrap("AAAA\nBBBB\nCCCC\nDDDD"), "AAAA BBBB CCCC DDDD");
    let opts = WrapOptions::new(9);
    assert_eq!(opts.wrap("AAAA BBBB CCCC DDDD"), "AAAA BBBB\nCCCC DDDD");
}

#[test]
fn conversions() {
    assert_eq!(to_number("123abc"), 123);
    assert_eq!(to_double("2.5 volts"), 2.5);
    assert!(is_number("2.5"));
    assert_eq!(parse_number(""), Err(ParseNumberError::Empty));
    assert_eq!(to_human_size(1024), "1.00 KB");
    assert_eq!(to_human_size(0), "0.00 B");
    assert_eq!(decimal_to_binary_string(5, 8), "00000101");
    assert_eq!(get_ordinal(11), "11th");
    assert_eq!(get_ordinal(21), "21st");
}

#[test]
fn formatting_results_are_independent() {
    let a = to_human_size(1024);
    let b = to_human_size(2048);
    assert_eq!(a, "1.00 KB");
    assert_eq!(b, "2.00 KB");
    let x = decimal_to_binary_string(1, 2);
    let y = decimal_to_binary_string(2, 2);
    assert_eq!((x.as_str(), y.as_str()), ("01", "10"));
}

#[test]
fn words_among_commands() {
    let commands = ["quit", "query", "save"];
    let abbrev = MatchPolicy {
        case: Case::Insensitive,
        prefix: true,
        ..MatchPolicy::default()
    };
    assert!(word_is_among("QU", &commands, abbrev));
    assert!(!word_is_among("load", &commands, abbrev));
    assert!(word_is_among("save", &commands, MatchPolicy::exact(Case::Sensitive)));
}

#[test]
fn utilities_are_thread_safe() {
    let handles: Vec<_> = (1..=4u64)
        .map(|n| std::thread::spawn(move || to_human_size(n * 1024)))
        .collect();
    let sizes: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("worker panicked"))
        .collect();
    assert_eq!(sizes, vec!["1.00 KB", "2.00 KB", "3.00 KB", "4.00 KB"]);
}
