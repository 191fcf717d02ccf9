// Example walking a document through the recognizers by hand

use eatjson::{eat, integer, string, Match, Parser, ParserConfig};

fn main() {
    let json = r#"{"name": "value", "number": -4.2e1, "flag": true}"#;
    println!("Input: {}", json);

    // Consume the first member one production at a time
    let steps = eat(json, "{")
        .and_then(string)
        .and_then(|rest| eat(rest, ":"))
        .and_then(string)
        .and_then(|rest| eat(rest, ","));
    match steps {
        Match::Matched(rest) => println!("After first member: {:?}", rest),
        Match::NoMatch => println!("First member did not match"),
    }

    println!("integer(\"-4.2e1,\") -> {:?}", integer("-4.2e1,"));

    println!("parse -> {}", eatjson::parse(json));

    let strict = Parser::with_config(ParserConfig::new().with_strict(true).with_max_depth(8));
    for doc in [json, r#"["\l"]"#, "[[[[[[[[[]]]]]]]]]", "[1, 2,]"] {
        match strict.validate(doc) {
            Ok(()) => println!("{:<24} valid", doc),
            Err(e) => println!("{:<24} invalid: {}", doc, e),
        }
    }
}
