/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use amplify::input::UpdateAppInput;
use amplify::model::{AutoBranchCreationConfig, CustomRule, Platform, Stage};
use proptest::prelude::*;
use smithy_types::test_util::{optional_bool, optional_list, optional_string, optional_string_map};
use smithy_types::ShapeHash;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// Secrets carry a marker no other generated member can contain.
fn secret() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("#[a-z0-9]{4,12}")
}

// Entries go into a fresh map in descending key order, so the map gets its own hasher
// state and insertion order.
fn reversed_entries(map: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    entries.sort();
    entries.reverse();
    entries
}

fn rebuild_config(config: &AutoBranchCreationConfig) -> AutoBranchCreationConfig {
    let mut rebuilt = AutoBranchCreationConfig::builder()
        .set_stage(config.stage().cloned())
        .set_framework(config.framework().map(str::to_string))
        .set_enable_auto_build(config.enable_auto_build())
        .set_basic_auth_credentials(config.basic_auth_credentials().map(str::to_string))
        .set_enable_basic_auth(config.enable_basic_auth())
        .set_build_spec(config.build_spec().map(str::to_string))
        .set_enable_pull_request_preview(config.enable_pull_request_preview())
        .set_pull_request_environment_name(
            config.pull_request_environment_name().map(str::to_string),
        )
        .build();
    if let Some(variables) = config.environment_variables() {
        if variables.is_empty() {
            rebuilt.environment_variables = Some(HashMap::new());
        }
        for (k, v) in reversed_entries(variables) {
            rebuilt.add_environment_variables_entry(k, v).unwrap();
        }
    }
    rebuilt
}

fn rebuild_input(input: &UpdateAppInput) -> UpdateAppInput {
    let mut builder = UpdateAppInput::builder()
        .set_app_id(input.app_id().map(str::to_string))
        .set_name(input.name().map(str::to_string))
        .set_description(input.description().map(str::to_string))
        .set_platform(input.platform().cloned())
        .set_iam_service_role_arn(input.iam_service_role_arn().map(str::to_string))
        .set_enable_branch_auto_build(input.enable_branch_auto_build())
        .set_enable_basic_auth(input.enable_basic_auth())
        .set_basic_auth_credentials(input.basic_auth_credentials().map(str::to_string))
        .set_build_spec(input.build_spec().map(str::to_string))
        .set_enable_auto_branch_creation(input.enable_auto_branch_creation())
        .set_auto_branch_creation_config(input.auto_branch_creation_config().map(rebuild_config))
        .set_repository(input.repository().map(str::to_string))
        .set_oauth_token(input.oauth_token().map(str::to_string))
        .set_access_token(input.access_token().map(str::to_string));
    for rule in input.custom_rules().unwrap_or_default() {
        builder = builder.custom_rules(rule.clone());
    }
    if input.custom_rules() == Some(&[][..]) {
        builder = builder.set_custom_rules(Some(vec![]));
    }
    for pattern in input.auto_branch_creation_patterns().unwrap_or_default() {
        builder = builder.auto_branch_creation_patterns(pattern.clone());
    }
    if input.auto_branch_creation_patterns() == Some(&[][..]) {
        builder = builder.set_auto_branch_creation_patterns(Some(vec![]));
    }
    if let Some(variables) = input.environment_variables() {
        if variables.is_empty() {
            builder = builder.set_environment_variables(Some(HashMap::new()));
        }
        for (k, v) in reversed_entries(variables) {
            builder = builder.add_environment_variables_entry(k, v).unwrap();
        }
    }
    builder.build()
}

prop_compose! {
    fn custom_rule()(
        source in optional_string(),
        target in optional_string(),
        status in optional_string(),
        condition in optional_string()
    ) -> CustomRule {
        CustomRule::builder()
            .set_source(source)
            .set_target(target)
            .set_status(status)
            .set_condition(condition)
            .build()
    }
}

prop_compose! {
    fn auto_branch_creation_config()(
        stage in proptest::option::of(proptest::sample::select(Stage::values()).prop_map(Stage::from)),
        framework in optional_string(),
        flags in (optional_bool(), optional_bool(), optional_bool()),
        environment_variables in optional_string_map(),
        basic_auth_credentials in optional_string(),
        build_spec in optional_string(),
        pull_request_environment_name in optional_string()
    ) -> AutoBranchCreationConfig {
        AutoBranchCreationConfig::builder()
            .set_stage(stage)
            .set_framework(framework)
            .set_enable_auto_build(flags.0)
            .set_environment_variables(environment_variables)
            .set_basic_auth_credentials(basic_auth_credentials)
            .set_enable_basic_auth(flags.1)
            .set_build_spec(build_spec)
            .set_enable_pull_request_preview(flags.2)
            .set_pull_request_environment_name(pull_request_environment_name)
            .build()
    }
}

prop_compose! {
    fn update_app_input()(
        ids in (optional_string(), optional_string(), optional_string(), optional_string()),
        platform in proptest::option::of(Just(Platform::Web)),
        environment_variables in optional_string_map(),
        flags in (optional_bool(), optional_bool(), optional_bool()),
        custom_rules in optional_list(custom_rule()),
        build_spec in optional_string(),
        auto_branch_creation_patterns in optional_list("[a-z/*]{1,12}"),
        auto_branch_creation_config in proptest::option::of(auto_branch_creation_config()),
        secrets in (secret(), secret(), secret()),
        repository in optional_string()
    ) -> UpdateAppInput {
        UpdateAppInput::builder()
            .set_app_id(ids.0)
            .set_name(ids.1)
            .set_description(ids.2)
            .set_platform(platform)
            .set_iam_service_role_arn(ids.3)
            .set_environment_variables(environment_variables)
            .set_enable_branch_auto_build(flags.0)
            .set_enable_basic_auth(flags.1)
            .set_basic_auth_credentials(secrets.0)
            .set_custom_rules(custom_rules)
            .set_build_spec(build_spec)
            .set_enable_auto_branch_creation(flags.2)
            .set_auto_branch_creation_patterns(auto_branch_creation_patterns)
            .set_auto_branch_creation_config(auto_branch_creation_config)
            .set_repository(repository)
            .set_oauth_token(secrets.1)
            .set_access_token(secrets.2)
            .build()
    }
}

proptest! {
    #[test]
    fn clone_equals_original(input in update_app_input()) {
        let copy = input.clone();
        prop_assert_eq!(&copy, &input);
        prop_assert_eq!(copy.shape_hash(), input.shape_hash());
        prop_assert_eq!(std_hash(&copy), std_hash(&input));
        prop_assert_eq!(copy.to_string(), input.to_string());
    }

    #[test]
    fn independently_built_inputs_are_equal(input in update_app_input()) {
        let rebuilt = rebuild_input(&input);
        prop_assert_eq!(&rebuilt, &input);
        prop_assert_eq!(rebuilt.shape_hash(), input.shape_hash());
        prop_assert_eq!(std_hash(&rebuilt), std_hash(&input));
        prop_assert_eq!(rebuilt.to_string(), input.to_string());
    }

    #[test]
    fn duplicate_entry_leaves_map_unchanged(input in update_app_input(), key in "[A-Z_]{1,8}") {
        let mut input = input;
        let _ = input.add_environment_variables_entry(key.clone(), "first");
        let before = input.environment_variables.clone();
        let err = input
            .add_environment_variables_entry(key.clone(), "second")
            .expect_err("key is already present");
        prop_assert_eq!(err.key(), key.as_str());
        prop_assert_eq!(&input.environment_variables, &before);
        input.clear_environment_variables_entries();
        prop_assert!(input.environment_variables().is_none());
    }

    #[test]
    fn secrets_never_rendered(input in update_app_input()) {
        let debug = format!("{:?}", input);
        let display = input.to_string();
        for secret in [&input.oauth_token, &input.access_token, &input.basic_auth_credentials]
            .into_iter()
            .flatten()
        {
            prop_assert!(!debug.contains(secret.as_str()));
            prop_assert!(!display.contains(secret.as_str()));
        }
    }
}

#[test]
fn nested_config_renders_inside_listing() {
    let mut config = AutoBranchCreationConfig::builder()
        .stage(Stage::PullRequest)
        .enable_pull_request_preview(true)
        .build();
    config
        .add_environment_variables_entry("ZETA", "z")
        .unwrap()
        .add_environment_variables_entry("ALPHA", "a")
        .unwrap();
    let input = UpdateAppInput::builder()
        .app_id("d2abc")
        .auto_branch_creation_config(config)
        .build();
    assert_eq!(
        input.to_string(),
        "{AppId: d2abc,AutoBranchCreationConfig: {Stage: PULL_REQUEST,\
         EnvironmentVariables: {ALPHA=a, ZETA=z},EnablePullRequestPreview: true}}"
    );
}

#[test]
fn builder_add_entry_rejects_duplicates() {
    let builder = UpdateAppInput::builder()
        .add_environment_variables_entry("STAGE", "prod")
        .unwrap();
    let err = builder
        .clone()
        .add_environment_variables_entry("STAGE", "dev")
        .unwrap_err();
    assert_eq!(err.key(), "STAGE");
    let input = builder.clear_environment_variables_entries().build();
    assert_eq!(input.environment_variables(), None);
}

#[test]
fn shapes_work_as_set_members() {
    let mut set = std::collections::HashSet::new();
    set.insert(CustomRule::builder().source("/a").build());
    set.insert(CustomRule::builder().source("/a").build());
    set.insert(CustomRule::builder().source("/b").build());
    assert_eq!(set.len(), 2);
}
