mod common;

use common::fixture_path;
use personaforge::config::{AgentPersona, ConfigLoader, LoadResult, ProviderConfig, WeightedTask};
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::path::Path;

fn load_fixture(name: &str) -> LoadResult {
    ConfigLoader::with_defaults()
        .load(&fixture_path(name))
        .unwrap_or_else(|e| panic!("{name} should load: {e}"))
}

/// The canonical document loads and exposes exactly the expected values.
#[test]
fn canonical_document_end_to_end() {
    let result = load_fixture("zerecall.json");
    let persona = &result.persona;

    assert_eq!(persona.name, "ZereCall");
    assert_eq!(persona.loop_delay, 8);
    assert!(!persona.use_time_based_weights);

    let weights: Vec<f64> = persona.tasks.iter().map(|t| t.weight).collect();
    assert_eq!(weights, vec![1.0, 2.0, 3.0]);

    let names: Vec<&str> = persona.provider_names().collect();
    assert_eq!(
        names,
        vec![
            "ollama",
            "hyperbolic",
            "galadriel",
            "sonic",
            "allora",
            "ethereum",
            "discord"
        ]
    );

    let discord = persona.provider("discord").expect("discord entry");
    assert_eq!(discord.get_str("server_id"), Some("1234567890123456789"));
    assert_eq!(discord.get_u64("message_read_count"), Some(10));
    assert_eq!(discord.get_str("message_emoji_name"), Some("brain"));

    assert!(persona.system_prompt().starts_with("You are ZereCall"));

    // Multipliers are defined but toggled off, so none apply
    assert_eq!(persona.multiplier("tweet_night_multiplier"), None);
}

/// Load-then-reserialize preserves every field value and sequence order.
#[test]
fn fixture_round_trip_preserves_values() {
    let first = load_fixture("zerecall.json");

    let text = serde_json::to_string(first.persona.as_ref()).expect("reserialize");
    let second = ConfigLoader::with_defaults()
        .load_str(&text, Path::new("roundtrip.json"))
        .expect("reserialized persona should load");

    assert_eq!(first.persona, second.persona);

    // Sequence order survives in the serialized form as well
    let value: Value = serde_json::from_str(&text).unwrap();
    let bio = value["bio"].as_array().unwrap();
    assert!(bio[0].as_str().unwrap().starts_with("You are ZereCall"));
    let providers: Vec<&str> = value["config"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(providers[0], "ollama");
    assert_eq!(providers[6], "discord");
}

// ============================================================================
// Property: round trip over generated documents
// ============================================================================

prop_compose! {
    fn arb_task()(
        name in "[a-z][a-z0-9-]{0,15}",
        weight in 0.001f64..10_000.0,
    ) -> WeightedTask {
        WeightedTask { name, weight, extra: Map::new() }
    }
}

fn arb_providers() -> impl Strategy<Value = Vec<ProviderConfig>> {
    // A set keeps generated provider names unique, as the schema demands
    proptest::collection::btree_set("[a-z]{1,10}", 0..6).prop_map(|names| {
        names
            .into_iter()
            .map(|name| {
                let mut settings = Map::new();
                settings.insert("model".to_string(), Value::String(format!("{name}-large")));
                ProviderConfig { name, settings }
            })
            .collect()
    })
}

prop_compose! {
    fn arb_persona()(
        name in "[A-Za-z][A-Za-z0-9_-]{0,20}",
        bio in proptest::collection::vec("[ -~]{0,40}", 0..4),
        traits in proptest::collection::vec("[A-Za-z]{1,12}", 0..4),
        examples in proptest::collection::vec("[ -~]{0,60}", 0..3),
        example_accounts in proptest::collection::vec("[a-z_]{1,12}", 0..3),
        loop_delay in 0u64..86_400,
        config in arb_providers(),
        tasks in proptest::collection::vec(arb_task(), 1..5),
        use_time_based_weights in any::<bool>(),
        multipliers in proptest::collection::btree_map("[a-z_]{1,14}", 0.01f64..10.0, 0..4),
    ) -> AgentPersona {
        AgentPersona {
            name,
            bio,
            traits,
            examples,
            example_accounts,
            loop_delay,
            config,
            tasks,
            use_time_based_weights,
            time_based_multipliers: multipliers.into_iter().collect(),
            extra: Map::new(),
        }
    }
}

proptest! {
    #[test]
    fn load_then_reserialize_round_trips(persona in arb_persona()) {
        let text = serde_json::to_string(&persona).expect("serialize");
        let result = ConfigLoader::with_defaults()
            .load_str(&text, Path::new("prop.json"))
            .expect("generated persona should load");
        prop_assert_eq!(result.persona.as_ref(), &persona);
    }
}
