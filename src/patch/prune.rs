// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Removes the empty leaves a typed round trip can introduce.

use serde_json::{Map, Value};

/// Recursively delete `null` and `""` entries from a map.
///
/// Nested maps are pruned in place, as are maps held directly in arrays.
/// Empty maps themselves are kept (`emptyDir: {}` carries meaning).
pub fn prune_empty(map: &mut Map<String, Value>) {
    map.retain(|_, value| match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Object(nested) => {
            prune_empty(nested);
            true
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                if let Value::Object(nested) = item {
                    prune_empty(nested);
                }
            }
            true
        }
        _ => true,
    });
}

/// Prune a value if it is a map; other values are left alone
pub fn prune_value(value: &mut Value) {
    if let Value::Object(map) = value {
        prune_empty(map);
    }
}
