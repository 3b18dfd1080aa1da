// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;
use std::thread;

use pathget::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn values_are_shareable() {
    assert_send_sync::<Value>();
    assert_send_sync::<Resolver>();
}

#[test]
fn concurrent_resolution() -> anyhow::Result<()> {
    let data = Arc::new(Value::from_json_str(
        r#"{"users": [{"name": "a"}, {"name": "b"}, {"name": "c"}]}"#,
    )?);

    let handles: Vec<_> = (0..3usize)
        .map(|i| {
            let data = Arc::clone(&data);
            thread::spawn(move || data.get_path(format!("users.{i}.name")).clone())
        })
        .collect();

    let mut names = vec![];
    for h in handles {
        names.push(h.join().map_err(|_| anyhow::anyhow!("resolver thread panicked"))?);
    }

    assert_eq!(
        names,
        vec![Value::from("a"), Value::from("b"), Value::from("c")]
    );
    Ok(())
}
