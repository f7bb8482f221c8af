//! End-to-end plain-text generation: readable text, no markup, pretty
//! tables, bare action links.

use herald::{Action, Body, Button, Email, Entry, Herald, Markdown, Product, Table};

fn example() -> (Herald, Email) {
    let herald = Herald {
        product: Product {
            name: "HeraldName".into(),
            link: "http://herald-link.com".into(),
            logo: "https://herald-link.com/img/logo.png".into(),
            copyright: "Copyright © Herald-Test".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    let email = Email {
        body: Body {
            name: "Jon Snow".into(),
            intros: vec!["Welcome to Herald! We're very excited to have you on board.".into()],
            dictionary: vec![
                Entry::new("Firstname", "Jon"),
                Entry::new("Birthday", "01/01/283"),
            ],
            tables: vec![Table {
                data: vec![
                    vec![
                        Entry::new("Item", "Golang"),
                        Entry::new(
                            "Description",
                            "Open source programming language that makes it easy to build \
                             simple, reliable, and efficient software",
                        ),
                        Entry::new("Price", "$10.99"),
                    ],
                    vec![
                        Entry::new("Item", "Herald"),
                        Entry::new("Description", "Programmatically create beautiful e-mails."),
                        Entry::new("Price", "$1.99"),
                    ],
                ],
                ..Default::default()
            }],
            actions: vec![Action {
                instructions: "To get started with Herald, please click here:".into(),
                button: Button {
                    color: "#22BC66".into(),
                    text: "Confirm your account".into(),
                    link: "https://herald-example.com/confirm?token=d9729feb74992cc3482b350163a1a010"
                        .into(),
                    ..Default::default()
                },
                ..Default::default()
            }],
            outros: vec![
                "Need help, or have questions? Just reply to this email, we'd love to help.".into(),
            ],
            ..Default::default()
        },
    };

    (herald, email)
}

#[test]
fn product_branding_without_logo_or_markup() {
    let (herald, email) = example();
    let text = herald.generate_plain_text(&email).unwrap();

    assert!(text.contains("HeraldName"));
    assert!(text.contains("http://herald-link.com"));
    assert!(text.contains("Copyright © Herald-Test"));
    assert!(!text.contains("https://herald-link.com/img/logo.png"));
    assert!(!text.contains("<"));
}

#[test]
fn greeting_intros_dictionary_and_outros() {
    let (herald, email) = example();
    let text = herald.generate_plain_text(&email).unwrap();

    assert!(text.contains("Hi Jon Snow,"));
    assert!(text.contains("Welcome to Herald!"));
    assert!(text.contains("Firstname: Jon"));
    assert!(text.contains("Birthday: 01/01/283"));
    assert!(text.contains("Need help, or have questions?"));
    assert!(text.contains("Yours truly,"));
}

#[test]
fn tables_are_pretty_printed() {
    let (herald, email) = example();
    let text = herald.generate_plain_text(&email).unwrap();

    assert!(text.contains("| ITEM"));
    assert!(text.contains("DESCRIPTION"));
    assert!(text.contains("| Golang |"));
    assert!(text.contains("$10.99"));
    assert!(text.contains("$1.99"));
    // Bordered grid with header separator.
    let borders = text.lines().filter(|line| line.starts_with("+--")).count();
    assert_eq!(borders, 3);
    // Long description wrapped onto continuation lines.
    assert!(text.contains("|        |"));
}

#[test]
fn action_link_appears_without_button_chrome() {
    let (herald, email) = example();
    let text = herald.generate_plain_text(&email).unwrap();

    assert!(text.contains("To get started with Herald, please click here:"));
    assert!(text
        .contains("https://herald-example.com/confirm?token=d9729feb74992cc3482b350163a1a010"));
    assert!(!text.contains("Confirm your account"));
    assert!(!text.contains("#22BC66"));
}

#[test]
fn invite_code_appears_in_plain_text() {
    let (herald, mut email) = example();
    email.body.actions = vec![Action {
        instructions: "Use this code at signup:".into(),
        invite_code: "123456".into(),
        ..Default::default()
    }];

    let text = herald.generate_plain_text(&email).unwrap();
    assert!(text.contains("Use this code at signup:"));
    assert!(text.contains("123456"));
}

#[test]
fn markdown_fields_keep_their_source_text() {
    let (herald, mut email) = example();
    email.body.intros_markdown = Some(Markdown::new("**Welcome** to our _premium_ service!"));

    let text = herald.generate_plain_text(&email).unwrap();
    // Markdown is readable prose; the source is printed as-is.
    assert!(text.contains("**Welcome** to our _premium_ service!"));
    assert!(!text.contains("<strong>"));
}

#[test]
fn free_markdown_replaces_data_sections() {
    let (herald, mut email) = example();
    email.body.free_markdown = Some(Markdown::new("Your order shipped."));

    let text = herald.generate_plain_text(&email).unwrap();
    assert!(text.contains("Your order shipped."));
    assert!(!text.contains("Birthday"));
    assert!(!text.contains("$10.99"));
    assert!(!text.contains("https://herald-example.com/confirm"));
}

#[test]
fn title_replaces_greeting() {
    let (herald, mut email) = example();
    email.body.title = "Your weekly digest".into();

    let text = herald.generate_plain_text(&email).unwrap();
    assert!(text.contains("Your weekly digest"));
    assert!(!text.contains("Hi Jon Snow"));
}

#[test]
fn deprecated_table_is_rendered() {
    let (herald, mut email) = example();
    email.body.tables = vec![];
    email.body.table = Table {
        data: vec![vec![Entry::new("Item", "LegacyRow")]],
        ..Default::default()
    };

    let text = herald.generate_plain_text(&email).unwrap();
    assert!(text.contains("LegacyRow"));
}
