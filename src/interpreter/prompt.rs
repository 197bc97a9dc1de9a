//! Fixed instruction text and schemas sent to, and checked against, the model

use serde_json::{json, Value};

use crate::interpreter::intent::ToolAction;

/// System instruction describing the five inventory tools
pub const SYSTEM_PROMPT: &str = r#"You are StockMaster, an inventory management agent for a warehouse.
Translate each natural-language command into exactly one structured tool call.

Tools:
1. ADD_STOCK - goods arriving from a vendor (receipts).
   Words like "received", "bought", "arrived".
   Fields: name, qty, location, category (optional).
2. DELIVER_STOCK - goods leaving to a customer (deliveries).
   Words like "deliver", "ship", "send", "sold".
   Fields: name, qty.
3. MOVE_STOCK - moving stock between internal locations (transfers).
   Words like "move", "transfer", "put".
   Fields: name, qty (optional), to_location.
4. ADJUST_STOCK - correcting a quantity after a physical count.
   Words like "correct", "set stock to", "audit says".
   Fields: name, true_qty.
5. REPORT - questions about the current stock or dashboard.
   Words like "show me", "what is", "list".

Rules:
- Reply with the JSON object only, matching the response schema. No markdown.
- Use category "General" for new products when none is given.
- If the command is unclear, reply with tool "UNKNOWN".
"#;

/// Response schema in the Generative Language API's OpenAPI subset
pub fn response_schema() -> Value {
    let tools: Vec<&str> = ToolAction::all().iter().map(|t| t.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "tool": { "type": "STRING", "enum": tools },
            "name": { "type": "STRING" },
            "qty": { "type": "INTEGER" },
            "location": { "type": "STRING" },
            "to_location": { "type": "STRING" },
            "true_qty": { "type": "INTEGER" },
            "category": { "type": "STRING" },
            "error": { "type": "STRING" }
        },
        "required": ["tool"]
    })
}

/// JSON Schema every reply must satisfy before it is decoded
///
/// `tool` is only required to be a string: an unlisted value is reported as
/// an unknown command, not as a malformed reply.
pub fn intent_json_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "tool": { "type": "string" },
            "name": { "type": "string" },
            "qty": { "type": "integer" },
            "location": { "type": "string" },
            "to_location": { "type": "string" },
            "true_qty": { "type": "integer" },
            "category": { "type": "string" },
            "error": { "type": "string" }
        },
        "required": ["tool"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_every_tool() {
        for tool in ToolAction::all() {
            assert!(SYSTEM_PROMPT.contains(tool.as_str()), "missing {tool}");
        }
    }

    #[test]
    fn test_response_schema_requires_tool() {
        let schema = response_schema();
        assert_eq!(schema["required"], json!(["tool"]));
        assert_eq!(schema["properties"]["tool"]["enum"].as_array().unwrap().len(), 6);
    }
}
