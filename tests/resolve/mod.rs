// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::{bail, Result};
use pathget::*;
use serde::{Deserialize, Serialize};
use std::env;
use test_generator::test_resources;

fn undefined() -> Value {
    Value::Undefined
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
struct Case {
    pub note: String,
    // A missing root, default or expectation means `undefined`.
    #[serde(default = "undefined")]
    pub data: Value,
    pub path: Value,
    #[serde(default = "undefined")]
    pub default: Value,
    #[serde(default = "undefined")]
    pub want: Value,
    pub config: Option<ResolverConfig>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Test {
    cases: Vec<Case>,
}

fn check(case: &Case) -> Result<()> {
    let resolver = match &case.config {
        Some(config) => Resolver::new(config.clone())?,
        None => Resolver::default(),
    };
    let path = PropertyPath::from(&case.path);

    // An explicit `undefined` default must behave exactly like no default.
    let with_default = resolver.resolve(&case.data, &path, Some(&case.default));
    let without_default = resolver.resolve(&case.data, &path, None);
    if case.default.is_undefined() && with_default != without_default {
        bail!("undefined default changed the result: {with_default} vs {without_default}");
    }

    if with_default != &case.want {
        bail!(
            "expected `{}`, got `{}`",
            serde_json::to_string(&case.want)?,
            serde_json::to_string(with_default)?
        );
    }

    // No hidden state between calls.
    if resolver.resolve(&case.data, &path, Some(&case.default)) != with_default {
        bail!("second resolution differs from the first");
    }
    Ok(())
}

fn yaml_test_impl(file: &str) -> Result<()> {
    println!("\nrunning {file}");

    let yaml = std::fs::read_to_string(file)?;
    let test: Test = serde_yaml::from_str(&yaml)?;

    for case in &test.cases {
        print!("case {} ", case.note);
        if let Err(e) = check(case) {
            bail!("case `{}` failed: {e}", case.note);
        }
        println!("passed");
    }

    println!("{} cases passed.", test.cases.len());
    Ok(())
}

fn yaml_test(file: &str) -> Result<()> {
    match yaml_test_impl(file) {
        Ok(_) => Ok(()),
        Err(e) => {
            // If Err is returned, it doesn't always get printed by cargo test.
            // Therefore, panic with the error.
            panic!("{}", e);
        }
    }
}

#[test]
#[ignore = "intended for running a single yaml file"]
fn one_yaml() -> Result<()> {
    let mut file = String::default();
    for a in env::args() {
        if a.ends_with(".yaml") {
            file = a;
            break;
        }
    }

    if file.is_empty() {
        bail!("missing yaml test file");
    }

    yaml_test(file.as_str())
}

#[test_resources("tests/resolve/cases/*.yaml")]
fn run(path: &str) {
    yaml_test(path).unwrap()
}

#[test]
fn get_matches_resolve() -> Result<()> {
    let data = Value::from_json_str(r#"{"a": {"b": {"c": 3}}, "z": null}"#)?;
    let fallback = Value::from("default");
    for path in ["a.b.c", "a.b.x", "z", "z.q", "", "a"] {
        assert_eq!(get(&data, path), resolve(&data, path, None), "{path}");
        assert_eq!(
            get_or(&data, path, &fallback),
            resolve(&data, path, Some(&fallback)),
            "{path}"
        );
    }
    Ok(())
}

#[test]
fn dotted_and_split_paths_agree() -> Result<()> {
    let data = Value::from_json_str(r#"{"a": [{"b": {"c": [0, false, ""]}}]}"#)?;
    let fallback = Value::from("default");
    for path in ["a", "a.0", "a.0.b", "a.0.b.c", "a.0.b.c.1", "a.0.b.c.2", "a.1.b", "a.x"] {
        let keys: Vec<&str> = path.split('.').collect();
        assert_eq!(
            get_or(&data, path, &fallback),
            get_or(&data, keys.as_slice(), &fallback),
            "{path}"
        );
    }
    Ok(())
}

#[test]
fn owned_paths() -> Result<()> {
    let data = Value::from_json_str(r#"{"list": [{"id": 7}]}"#)?;
    let index = 0;
    assert_eq!(
        get(&data, format!("list.{index}.id")),
        &Value::from(7u64)
    );
    assert_eq!(get(&data, Value::from("list.0.id")), &Value::from(7u64));
    Ok(())
}
