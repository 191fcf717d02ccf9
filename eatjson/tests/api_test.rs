// Behaviour of the public recognizers and the document parser

use eatjson::{eat, integer, parse, string, Match, Parser};

mod eat_primitive {
    use super::*;

    #[test]
    fn test_eats_the_provided_token() {
        assert_eq!(eat("abc123", "abc"), Match::Matched("123"));
    }

    #[test]
    fn test_returns_empty_string_when_everything_is_eaten() {
        assert_eq!(eat("abc", "abc"), Match::Matched(""));
    }

    #[test]
    fn test_eats_structural_token() {
        assert_eq!(eat("{}", "{"), Match::Matched("}"));
    }

    #[test]
    fn test_no_match_when_token_is_not_at_front() {
        assert_eq!(eat("abc123", "123"), Match::NoMatch);
    }

    #[test]
    fn test_no_match_on_empty_input() {
        assert_eq!(eat("", "123"), Match::NoMatch);
    }

    #[test]
    fn test_skips_leading_whitespace() {
        assert_eq!(eat(" abc123", "abc"), Match::Matched("123"));
    }

    #[test]
    fn test_remainder_is_suffix_after_token() {
        let inputs = ["  [1, 2]", "\n\t{\"a\": 1}", "true false", "\r\nnull"];
        let tokens = ["[", "{", "true", "null"];
        for (input, token) in inputs.iter().zip(tokens) {
            let trimmed = input.trim_start_matches(&[' ', '\t', '\n', '\r'][..]);
            let expected = &trimmed[token.len()..];
            assert_eq!(eat(input, token), Match::Matched(expected), "{input:?}");
            assert!(input.ends_with(expected));
        }
    }
}

mod integer_recognizer {
    use super::*;

    #[test]
    fn test_negative_numbers() {
        assert_eq!(integer("-123ok"), Match::Matched("ok"));
        assert_eq!(integer("-123"), Match::Matched(""));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(integer("1.123ok"), Match::Matched("ok"));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(integer("1e12ok"), Match::Matched("ok"));
    }
}

mod string_recognizer {
    use super::*;

    #[test]
    fn test_double_quoted_string() {
        assert_eq!(string(r#""This is a string"ok"#), Match::Matched("ok"));
    }

    #[test]
    fn test_escaped_double_quotes() {
        assert_eq!(
            string(r#""The quote says: \"This is my life\""ok"#),
            Match::Matched("ok")
        );
    }
}

mod document {
    use super::*;

    #[test]
    fn test_empty_value_fails() {
        assert!(!parse(""));
    }

    #[test]
    fn test_empty_object() {
        assert!(parse("{}"));
    }

    #[test]
    fn test_empty_array() {
        assert!(parse("[]"));
    }

    #[test]
    fn test_array_of_one_integer() {
        assert!(parse("[1]"));
    }

    #[test]
    fn test_array_of_multiple_integers() {
        assert!(parse("[1,2]"));
    }

    #[test]
    fn test_mixed_array() {
        assert!(parse(r#"[1,true,"one",2,"two",false]"#));
    }

    #[test]
    fn test_whitespace_padded_array() {
        assert!(parse("[1, 2, 3, 4]"));
        assert!(parse(" [ 1 ,\n2 ,\t3 , 4 ] \n"));
    }

    #[test]
    fn test_array_of_arrays() {
        assert!(parse("[[], [[], []]]"));
    }

    #[test]
    fn test_object_with_one_pair() {
        assert!(parse(r#"{"apple":"yes"}"#));
    }

    #[test]
    fn test_object_with_multiple_pairs() {
        assert!(parse(r#"{"apple":"yes", "pears": false}"#));
    }

    #[test]
    fn test_nested_objects() {
        assert!(parse(
            r#"{"apple":{"answer": false}, "pears": {"answer": "yes"}}"#
        ));
    }

    #[test]
    fn test_parser_value_matches_free_function() {
        let parser = Parser::default();
        for doc in ["{}", "[1,]", r#"{"a": [null]}"#, "", "-", "[\"\\q\"]"] {
            assert_eq!(parser.parse(doc), parse(doc), "{doc:?}");
        }
    }

    #[test]
    fn test_parallel_parsing() {
        let parser = Parser::new();
        let docs = [r#"{"a": [1, 2, 3]}"#, "[1, 2", r#""x""#, "nul"];
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || docs.map(|doc| parser.parse(doc))))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), [true, false, true, false]);
            }
        });
    }
}
