use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use pagesmith::output::{render_pages, write_pages};
use pagesmith::pipeline::model::Category;
use pagesmith::pipeline::stages::{QUESTION_COUNT, derive, normalize};
use pagesmith::{Pipeline, RawProductRecord};

const GLOWBOOST: &str = r#"{
    "name": "GlowBoost Vitamin C Serum",
    "benefits": ["Brightening", "Fades dark spots"],
    "ingredients": ["Vitamin C", "Hyaluronic Acid"],
    "usage": "Apply 2-3 drops in the morning before sunscreen"
}"#;

fn run_json(input: &str) -> Value {
    let raw = RawProductRecord::from_json_str(input).unwrap();
    Pipeline::new().run(raw).unwrap().to_value().unwrap()
}

#[test]
fn glowboost_scenario() {
    let output = run_json(GLOWBOOST);

    assert_eq!(output["faq.json"]["content"]["total_questions"], 16);

    let benefits = &output["product_page.json"]["content"]["benefits"]["items"];
    assert_eq!(benefits.as_array().unwrap().len(), 2);
    assert_eq!(
        benefits[0],
        json!({"benefit": "Brightening", "description": "Brightening tailored for your skin"})
    );

    assert_eq!(
        output["comparison_page.json"]["content"]["comparison"]["competitors"],
        json!([])
    );
    assert_eq!(
        output["product_page.json"]["content"]["usage"]["steps"][2]["instruction"],
        "Apply 2-3 drops in the morning before sunscreen"
    );
}

#[test]
fn output_has_three_enveloped_pages() {
    let output = run_json(GLOWBOOST);
    let pages = output.as_object().unwrap();

    let names: Vec<&str> = pages.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["faq.json", "product_page.json", "comparison_page.json"]);

    for page in pages.values() {
        let keys: Vec<&str> = page.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "meta", "content"]);
        assert_eq!(page["meta"]["version"], "1.0");
    }

    assert_eq!(output["faq.json"]["type"], "faq_page");
    assert_eq!(output["product_page.json"]["type"], "product_page");
    assert_eq!(output["comparison_page.json"]["type"], "comparison_page");
}

#[test]
fn faq_page_layout() {
    let output = run_json(GLOWBOOST);
    let faq = &output["faq.json"];

    assert_eq!(
        faq["meta"],
        json!({
            "title": "Frequently Asked Questions",
            "description": "Find answers to common questions about our product",
            "version": "1.0"
        })
    );

    let sections = faq["content"]["sections"].as_object().unwrap();
    let labels: Vec<&str> = sections.keys().map(String::as_str).collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, expected);

    assert_eq!(
        sections["Product Overview"][0],
        json!({"question": "What is GlowBoost Vitamin C Serum?", "id": 1})
    );
    assert!(sections.values().all(|s| s.as_array().unwrap().len() == 4));
}

#[test]
fn empty_record_completes_with_fallbacks() {
    let output = run_json("{}");

    assert_eq!(output["faq.json"]["content"]["total_questions"], 16);
    assert_eq!(
        output["product_page.json"]["content"]["benefits"]["items"],
        json!([])
    );
    assert_eq!(
        output["product_page.json"]["content"]["ingredients"]["items"],
        json!([])
    );
    assert_eq!(
        output["product_page.json"]["content"]["usage"]["steps"][2]["instruction"],
        "Massage gently until absorbed"
    );
    assert_eq!(
        output["comparison_page.json"]["content"]["comparison"]["our_product"],
        "Unknown Product"
    );

    let questions = derive(&normalize(&RawProductRecord::default()));
    assert_eq!(questions.len(), QUESTION_COUNT);
    assert_eq!(questions[8].context, "Targets: multiple skin concerns.");
}

#[test]
fn questions_are_ordered_by_category() {
    let raw = RawProductRecord::from_json_str(GLOWBOOST).unwrap();
    let questions = derive(&normalize(&raw));

    let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=16).collect::<Vec<_>>());

    let categories: Vec<Category> = questions.iter().map(|q| q.category).collect();
    let expected: Vec<Category> = Category::ALL
        .iter()
        .flat_map(|c| std::iter::repeat_n(*c, 4))
        .collect();
    assert_eq!(categories, expected);
}

#[test]
fn competitors_flow_to_comparison_page() {
    let output = run_json(
        r#"{"name": "GlowBoost", "competitor_products": {"PureGlow Serum": "₹899", "Radiant C": "₹1299"}}"#,
    );
    assert_eq!(
        output["comparison_page.json"]["content"]["comparison"]["competitors"],
        json!(["PureGlow Serum", "Radiant C"])
    );
    assert_eq!(
        output["comparison_page.json"]["content"]["testimonials"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn numeric_competitor_prices_run_through() {
    let output = run_json(r#"{"price": 699, "competitor_products": {"PureGlow Serum": 899}}"#);
    assert_eq!(
        output["comparison_page.json"]["content"]["comparison"]["competitors"],
        json!(["PureGlow Serum"])
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let render = || {
        let raw = RawProductRecord::from_json_str(GLOWBOOST).unwrap();
        let pages = Pipeline::new().run(raw).unwrap();
        render_pages(&pages, true).unwrap()
    };
    assert_eq!(render(), render());
}

#[test]
fn independent_runs_in_parallel() {
    let pipeline = Pipeline::new();
    let expected = run_json(GLOWBOOST);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let raw = RawProductRecord::from_json_str(GLOWBOOST).unwrap();
                    pipeline.run(raw).unwrap().to_value().unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn pages_written_to_disk_keep_unicode() {
    let dir = tempfile::tempdir().unwrap();
    let raw = RawProductRecord::from_yaml_str(
        "name: GlowBoost\ncompetitor_products:\n  Sérum Éclat: \"₹899\"\n",
    )
    .unwrap();
    let pages = Pipeline::new().run(raw).unwrap();

    let written = write_pages(dir.path(), &render_pages(&pages, true).unwrap()).unwrap();
    let comparison = std::fs::read_to_string(&written[2]).unwrap();
    assert!(written[2].ends_with("comparison_page.json"));
    assert!(comparison.contains("Sérum Éclat"));

    let parsed: Value = serde_json::from_str(&comparison).unwrap();
    assert_eq!(parsed, serde_json::to_value(&pages.comparison).unwrap());
}

#[test]
fn malformed_shape_is_rejected_before_the_pipeline() {
    let err = RawProductRecord::from_json_str(r#"{"ingredients": {"Vitamin C": 10}}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid JSON product record"));
}
