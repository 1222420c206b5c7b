//! Expands the accessor template.
//!
//! The template lives in `src/templates/nextevent.rs.tera` and is compiled
//! into the binary. The name transformer is exposed to it as filters
//! (`const_name`, `private_name`, `snake_name`) and as the test
//! `external_event`.
//!
//! The template walks the names twice: every blocking accessor first, then
//! every channel accessor. Both passes follow the context order.
//!
//! Distinct raw names can share a derived form (`GuildID` and `GuildId` are
//! both `GUILD_ID`), which would emit duplicate items. Such pairs are
//! rejected before the template runs.

use crate::codegen::naming::{self, EventName};
use crate::error::RenderError;
use std::collections::{BTreeSet, HashMap};
use tera::{Context, Tera, Value};

pub const TEMPLATE_NAME: &str = "nextevent.rs.tera";

const TEMPLATE_SOURCE: &str = include_str!("../templates/nextevent.rs.tera");

/// The sorted, duplicate-free list of event names for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationContext {
    names: Vec<String>,
}

impl GenerationContext {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            names: unique.into_iter().collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Renders [`GenerationContext`]s through the accessor template.
#[derive(Debug)]
pub struct AccessorRenderer {
    tera: Tera,
}

impl AccessorRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template(TEMPLATE_SOURCE)
    }

    /// Builds a renderer around a custom template body. The filters and the
    /// test are registered exactly as for the built-in template.
    pub fn with_template(source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("const_name", name_filter(naming::const_name));
        tera.register_filter("private_name", name_filter(naming::private_name));
        tera.register_filter("snake_name", name_filter(naming::snake_name));
        tera.register_tester(
            "external_event",
            |value: Option<&Value>, _args: &[Value]| -> tera::Result<bool> {
                let name = event_name(value.unwrap_or(&Value::Null))?;
                Ok(name.is_external_event())
            },
        );
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    pub fn render(&self, context: &GenerationContext) -> Result<String, RenderError> {
        check_generated_idents(context)?;

        let mut tera_context = Context::new();
        tera_context.insert("names", context.names());
        let rendered = self.tera.render(TEMPLATE_NAME, &tera_context)?;
        tracing::debug!(
            events = context.len(),
            bytes = rendered.len(),
            "rendered accessor template"
        );
        Ok(rendered)
    }
}

/// Every item the template emits for one event, keyed on its identifier.
fn generated_idents(name: &EventName<'_>) -> [String; 3] {
    let snake = name.snake_form();
    [
        name.constant_form(),
        format!("next_{snake}"),
        format!("next_{snake}_chan"),
    ]
}

fn check_generated_idents(context: &GenerationContext) -> Result<(), RenderError> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    for raw in context.names() {
        let name = EventName::parse(raw)?;
        for ident in generated_idents(&name) {
            if let Some(first) = owners.get(ident.as_str()) {
                return Err(RenderError::Collision {
                    first: (*first).to_string(),
                    second: raw.clone(),
                    ident,
                });
            }
            owners.insert(ident, raw);
        }
    }
    Ok(())
}

fn event_name(value: &Value) -> tera::Result<EventName<'_>> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("expected an event name, got {value}")))?;
    EventName::parse(raw).map_err(|err| tera::Error::msg(err.to_string()))
}

fn name_filter(
    transform: fn(&str) -> String,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value, _args| {
        let name = event_name(value)?;
        Ok(Value::String(transform(name.raw())))
    }
}
