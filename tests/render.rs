use std::{
    fs,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use brook::{
    Arguments, Configuration, Engine, FileLoader, Locale, Loader, SubTemplates, Template,
    TemplateError, Value,
    error::{LexError, ParseError, RenderError},
    interpreter::{lexer, parser},
};
use walkdir::WalkDir;

fn render(source: &str, arguments: &Arguments) -> String {
    brook::render_str(source, arguments, &Locale::default(), &Configuration::default())
        .unwrap_or_else(|e| panic!("Template failed to render: {e}"))
}

fn render_err(source: &str, arguments: &Arguments) -> TemplateError {
    match brook::render_str(source, arguments, &Locale::default(), &Configuration::default()) {
        Ok(rendered) => panic!("Template rendered {rendered:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn all_fixture_templates_parse() {
    let mut count = 0;

    for entry in WalkDir::new("tests/templates").into_iter()
                                                .filter_map(Result::ok)
                                                .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let tokens = lexer::lex(&content).unwrap_or_else(|e| panic!("{path:?} failed to lex: {e}"));
        if let Err(e) = parser::core::parse(&tokens) {
            panic!("{path:?} failed to parse: {e}");
        }

        count += 1;
    }

    assert!(count > 0, "No fixture templates found in tests/templates");
}

#[test]
fn literal_text_and_substitution() {
    let mut arguments = Arguments::new();
    arguments.add("name", "World");

    assert_eq!(render("Hello {{ name }}!", &arguments), "Hello World!");
}

#[test]
fn empty_template_renders_empty() {
    assert_eq!(render("", &Arguments::new()), "");
}

#[test]
fn lone_braces_are_literal_text() {
    assert_eq!(render("a { b } c", &Arguments::new()), "a { b } c");
}

#[test]
fn newlines_in_text_are_preserved() {
    let mut arguments = Arguments::new();
    arguments.add("name", "World");

    assert_eq!(render("line one\n{{ name }}\nline three", &arguments),
               "line one\nWorld\nline three");
}

#[test]
fn if_else_exclusivity() {
    let source = "{{ if cond }}Yes{{ else }}No{{ end }}";

    let mut arguments = Arguments::new();
    arguments.add("cond", true);
    assert_eq!(render(source, &arguments), "Yes");

    arguments.add("cond", false);
    assert_eq!(render(source, &arguments), "No");
}

#[test]
fn if_without_else_defaults_to_empty() {
    let mut arguments = Arguments::new();
    arguments.add("cond", false);

    assert_eq!(render("a{{ if cond }}b{{ end }}c", &arguments), "ac");
}

#[test]
fn if_condition_can_be_a_dotted_id() {
    let mut arguments = Arguments::new();
    arguments.add_mapped_object("user", (), |_, scope| {
                 scope.add("active", true);
             });

    assert_eq!(render("{{ if user.active }}on{{ else }}off{{ end }}", &arguments),
               "on");
}

#[test]
fn for_else_exclusivity() {
    let source = "{{ for item in items }}[{{ item }}]{{ else }}empty{{ end }}";

    let mut arguments = Arguments::new();
    arguments.add_text_collection("items", Vec::<String>::new());
    assert_eq!(render(source, &arguments), "empty");

    arguments.add_text_collection("items", ["a", "b"]);
    assert_eq!(render(source, &arguments), "[a][b]");
}

#[test]
fn for_binds_item_fields_through_the_mapper() {
    struct Item {
        name:  String,
        price: u32,
    }

    let items = vec![Item { name:  "tea".to_string(),
                            price: 3, },
                     Item { name:  "coffee".to_string(),
                            price: 5, },];

    let mut arguments = Arguments::new();
    arguments.add_collection("items", items, |item, scope| {
                 scope.add("name", item.name.clone());
                 scope.add("price", item.price.to_string());
             });

    assert_eq!(render("{{ for item in items }}{{ item.name }}:{{ item.price }};{{ end }}",
                      &arguments),
               "tea:3;coffee:5;");
}

#[test]
fn loop_variable_shadows_and_restores_outer_binding() {
    let mut arguments = Arguments::new();
    arguments.add("item", "outer");
    arguments.add_text_collection("items", ["a", "b"]);

    assert_eq!(render("{{ item }}{{ for item in items }}[{{ item }}]{{ end }}{{ item }}",
                      &arguments),
               "outer[a][b]outer");
}

#[test]
fn loop_variable_is_not_visible_after_the_loop() {
    let mut arguments = Arguments::new();
    arguments.add_text_collection("items", ["a"]);

    match render_err("{{ for item in items }}{{ item }}{{ end }}{{ item }}", &arguments) {
        TemplateError::Render(RenderError::IdNotFound { path }) => assert_eq!(path, "item"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nested_loops_see_outer_loop_variables() {
    let mut arguments = Arguments::new();
    arguments.add_text_collection("rows", ["1", "2"]);
    arguments.add_text_collection("cells", ["a", "b"]);

    assert_eq!(render("{{ for row in rows }}{{ for cell in cells }}{{ row }}{{ cell }};{{ end }}{{ end }}",
                      &arguments),
               "1a;1b;2a;2b;");
}

#[test]
fn dotted_id_resolution_matches_manual_materialization() {
    let mut arguments = Arguments::new();
    arguments.add_mapped_object("a", (), |_, scope| {
                 scope.add_mapped_object("b", (), |_, scope| {
                          scope.add("c", "leaf");
                      });
             });

    let rendered = render("{{ a.b.c }}", &arguments);
    assert_eq!(rendered, "leaf");

    let Some(Value::Mapped(a)) = arguments.get("a") else {
        panic!("expected 'a' to be a mapped value");
    };
    let scope_a = a.materialize();
    let Some(Value::Mapped(b)) = scope_a.get("b") else {
        panic!("expected 'b' to be a mapped value");
    };
    let scope_b = b.materialize();
    let Some(Value::Text(leaf)) = scope_b.get("c") else {
        panic!("expected 'c' to be text");
    };

    assert_eq!(rendered, *leaf);
}

#[test]
fn missing_nested_key_reports_the_outermost_path() {
    let mut arguments = Arguments::new();
    arguments.add_mapped_object("user", (), |_, _scope| {});

    match render_err("{{ user.name }}", &arguments) {
        TemplateError::Render(RenderError::IdNotFound { path }) => assert_eq!(path, "user.name"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn deep_nested_failure_reports_the_full_chain() {
    let mut arguments = Arguments::new();
    arguments.add_mapped_object("a", (), |_, scope| {
                 scope.add_mapped_object("b", (), |_, _scope| {});
             });

    match render_err("{{ a.b.c }}", &arguments) {
        TemplateError::Render(RenderError::IdNotFound { path }) => assert_eq!(path, "a.b.c"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nested_access_on_plain_text_reports_id_not_found() {
    let mut arguments = Arguments::new();
    arguments.add("user", "just text");

    match render_err("{{ user.name }}", &arguments) {
        TemplateError::Render(RenderError::IdNotFound { path }) => assert_eq!(path, "user.name"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn iterating_a_non_collection_fails() {
    let mut arguments = Arguments::new();
    arguments.add("name", "World");

    match render_err("{{ for x in name }}{{ x }}{{ end }}", &arguments) {
        TemplateError::Render(RenderError::NotCollection { path }) => assert_eq!(path, "name"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn testing_a_non_condition_fails() {
    let mut arguments = Arguments::new();
    arguments.add("name", "World");

    match render_err("{{ if name }}x{{ end }}", &arguments) {
        TemplateError::Render(RenderError::NotCondition { path }) => assert_eq!(path, "name"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn emitting_a_collection_or_condition_fails() {
    let mut arguments = Arguments::new();
    arguments.add("flag", true);
    arguments.add_text_collection("items", ["a"]);

    assert!(matches!(render_err("{{ items }}", &arguments),
                     TemplateError::Render(RenderError::InvalidEvaluation { .. })));
    assert!(matches!(render_err("{{ flag }}", &arguments),
                     TemplateError::Render(RenderError::InvalidEvaluation { .. })));
}

#[test]
fn emitting_a_field_only_loop_item_fails() {
    struct Opaque;

    let mut arguments = Arguments::new();
    arguments.add_collection("items", vec![Opaque], |_item, scope| {
                 scope.add("field", "value");
             });

    assert!(matches!(render_err("{{ for item in items }}{{ item }}{{ end }}", &arguments),
                     TemplateError::Render(RenderError::InvalidEvaluation { .. })));
}

#[test]
fn unclosed_directive_is_a_lex_error() {
    match render_err("Hello {{ name", &Arguments::new()) {
        TemplateError::Lex(LexError::UnclosedDirective { line }) => assert_eq!(line, 1),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_directive_symbol_is_a_lex_error() {
    match render_err("{{ name! }}", &Arguments::new()) {
        TemplateError::Lex(LexError::UnexpectedSymbol { symbol, .. }) => assert_eq!(symbol, "!"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_end_is_a_parse_error() {
    let mut arguments = Arguments::new();
    arguments.add("cond", true);

    match render_err("{{ if cond }}yes", &arguments) {
        TemplateError::Parse(ParseError::UnexpectedEndOfInput { expected, .. }) => {
            assert_eq!(expected, "'end'");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stray_end_is_a_parse_error() {
    match render_err("oops{{ end }}", &Arguments::new()) {
        TemplateError::Parse(ParseError::UnexpectedToken { expected, found, .. }) => {
            assert_eq!(expected, "end of input");
            assert_eq!(found, "'end'");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn for_without_in_is_a_parse_error() {
    let mut arguments = Arguments::new();
    arguments.add_text_collection("items", ["a"]);

    match render_err("{{ for item of items }}x{{ end }}", &arguments) {
        TemplateError::Parse(ParseError::UnexpectedToken { expected, found, .. }) => {
            assert_eq!(expected, "'in'");
            assert_eq!(found, "property key 'of'");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn treatment_runs_once_on_plain_text_only() {
    fn bracket(text: &str) -> String {
        format!("[{text}]")
    }

    let mut arguments = Arguments::new();
    arguments.add("name", "ana");
    arguments.add_locale_sensitive("stamp", (), |_, _locale| "fixed".to_string());

    let configuration = Configuration::default().with_treatment(bracket);
    let rendered = brook::render_str("{{ name }} and {{ stamp }}",
                                     &arguments,
                                     &Locale::default(),
                                     &configuration).expect("template should render");

    assert_eq!(rendered, "[ana] and fixed");
}

#[test]
fn locale_sensitive_values_format_per_locale() {
    let mut arguments = Arguments::new();
    arguments.add_locale_sensitive("price", 1234.5_f64, |price, locale| match locale.tag() {
                 "pt-BR" => format!("R$ {price:.2}"),
                 _ => format!("${price:.2}"),
             });

    let configuration = Configuration::default();
    let source = "{{ price }}";

    let us = brook::render_str(source, &arguments, &Locale::new("en-US"), &configuration);
    let br = brook::render_str(source, &arguments, &Locale::new("pt-BR"), &configuration);

    assert_eq!(us.expect("en-US render"), "$1234.50");
    assert_eq!(br.expect("pt-BR render"), "R$ 1234.50");
}

#[test]
fn repeated_renders_are_idempotent() {
    let engine = Engine::new(FileLoader::new("tests/templates"));

    let mut arguments = Arguments::new();
    arguments.add("name", "World");

    let locale = Locale::new("en-US");
    let first = engine.render_path("greeting.html", &locale, &arguments)
                      .expect("first render");
    let second = engine.render_path("greeting.html", &locale, &arguments)
                       .expect("second render");

    assert_eq!(first, "Hello World!");
    assert_eq!(first, second);
}

struct CountingLoader {
    source: String,
    calls:  Arc<AtomicUsize>,
}

impl Loader for CountingLoader {
    fn load_source(&self, _template_path: &str, _locale: &Locale) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(self.source.clone())
    }
}

#[test]
fn loader_runs_once_per_template_and_locale() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = Engine::new(CountingLoader { source: "Hi {{ name }}".to_string(),
                                              calls:  Arc::clone(&calls), });

    let mut arguments = Arguments::new();
    arguments.add("name", "there");

    let us = Locale::new("en-US");
    engine.render_path("hi.html", &us, &arguments).expect("first render");
    engine.render_path("hi.html", &us, &arguments).expect("cached render");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let br = Locale::new("pt-BR");
    engine.render_path("hi.html", &br, &arguments).expect("other locale render");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn exact_locale_wins_over_the_default() {
    let engine = Engine::new(FileLoader::new("tests/templates"));

    let mut arguments = Arguments::new();
    arguments.add("name", "Ana");

    let rendered = engine.render_path("greeting.html", &Locale::new("pt-BR"), &arguments)
                         .expect("pt-BR render");

    assert_eq!(rendered, "Olá Ana!");
}

#[test]
fn missing_locale_falls_back_to_the_default() {
    let engine = Engine::new(FileLoader::new("tests/templates"));

    let mut arguments = Arguments::new();
    arguments.add("name", "Ana");

    // farewell.html exists only under en-US, the default locale.
    let rendered = engine.render_path("farewell.html", &Locale::new("pt-BR"), &arguments)
                         .expect("fallback render");

    assert_eq!(rendered, "Goodbye, Ana.");
}

#[test]
fn missing_in_every_locale_is_template_not_found() {
    let engine = Engine::new(FileLoader::new("tests/templates"));

    match engine.render_path("missing.html", &Locale::new("pt-BR"), &Arguments::new()) {
        Err(TemplateError::Render(RenderError::TemplateNotFound { path })) => {
            assert_eq!(path, "missing.html");
        },
        Ok(rendered) => panic!("render succeeded unexpectedly: {rendered:?}"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn menu_fixture_renders_both_branches() {
    let engine = Engine::new(FileLoader::new("tests/templates"));
    let locale = Locale::new("en-US");

    let mut arguments = Arguments::new();
    arguments.add("show_title", true);
    arguments.add("title", "Drinks");
    arguments.add_text_collection("items", ["tea", "coffee"]);

    assert_eq!(engine.render_path("menu.html", &locale, &arguments).expect("full menu"),
               "<h1>Drinks</h1><ul><li>tea</li><li>coffee</li></ul>");

    arguments.add("show_title", false);
    arguments.add_text_collection("items", Vec::<String>::new());

    assert_eq!(engine.render_path("menu.html", &locale, &arguments).expect("empty menu"),
               "<ul><li>nothing</li></ul>");
}

#[test]
fn profile_fixture_resolves_dotted_ids() {
    struct Address {
        city: String,
    }

    struct User {
        name:    String,
        address: Address,
    }

    let user = User { name:    "Ana".to_string(),
                      address: Address { city: "Lisbon".to_string() }, };

    let mut arguments = Arguments::new();
    arguments.add_mapped_object("user", user, |user, scope| {
                 scope.add("name", user.name.clone());
                 let city = user.address.city.clone();
                 scope.add_mapped_object("address", city, |city, scope| {
                          scope.add("city", city.clone());
                      });
             });

    let engine = Engine::new(FileLoader::new("tests/templates"));
    let rendered = engine.render_path("profile.html", &Locale::new("en-US"), &arguments)
                         .expect("profile render");

    assert_eq!(rendered, "Ana lives in Lisbon");
}

struct Header;

impl Template for Header {
    fn file_path(&self) -> &str {
        "master/header.html"
    }

    fn populate(&self, arguments: &mut Arguments) {
        arguments.add("site_name", "Brook");
    }
}

struct MasterPage {
    header: Header,
}

impl Template for MasterPage {
    fn file_path(&self) -> &str {
        "master/master.html"
    }

    fn add_sub_templates<'a>(&'a self, sub_templates: &mut SubTemplates<'a>) {
        sub_templates.add("header", &self.header);
    }
}

struct Page {
    master: MasterPage,
}

impl Template for Page {
    fn file_path(&self) -> &str {
        "master/page.html"
    }

    fn populate(&self, arguments: &mut Arguments) {
        arguments.add("body", "Welcome");
    }

    fn master_template(&self) -> Option<&dyn Template> {
        Some(&self.master)
    }
}

#[test]
fn composed_page_renders_inside_its_master() {
    let engine = Engine::new(FileLoader::new("tests/templates"));
    let page = Page { master: MasterPage { header: Header } };

    let rendered = engine.render(&page).expect("composed render");

    assert_eq!(rendered,
               "<header><h1>Brook</h1></header><main><p>Welcome</p></main>");
}
