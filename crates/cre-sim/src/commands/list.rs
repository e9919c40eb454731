use std::error::Error;

use cre_config::{cluster_names, engine_names, environment_names};
use serde_json::json;

use super::output::print_json;

pub fn run() -> Result<(), Box<dyn Error>> {
    print_json(&json!({
        "engines": engine_names(),
        "clusters": cluster_names(),
        "environments": environment_names(),
    }))
}
