//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Template rendering of listing records.
//!
//! Templates use handlebars syntax.  Output is never HTML-escaped and
//! strict mode is on, so a reference to an unknown field fails the render
//! instead of printing nothing.  Extra helpers available to templates:
//!
//! * `repeat STRING N`: STRING concatenated N times
//! * `rjust VALUE WIDTH`: VALUE right-justified in WIDTH columns
//! * `ljust VALUE WIDTH`: VALUE left-justified in WIDTH columns

use crate::config::FieldVisibility;
use crate::record::Record;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError, TemplateError,
};
use serde::Serialize;
use serde_json::Value;

const TEMPLATE_NAME: &str = "listing";

/// What a template sees for one record
#[derive(Serialize)]
struct EntryView<'a> {
    mode: &'a str,
    owner: &'a str,
    group: Option<&'a str>,
    size: u64,
    timestamp: Option<String>,
    date: Option<String>,
    time: Option<String>,
    name: &'a str,
    remainder: &'a str,
    link: Option<&'a str>,
    show: FieldVisibility,
}

impl<'a> EntryView<'a> {
    fn new(record: &'a Record, show: &FieldVisibility) -> Self {
        EntryView {
            mode: &record.mode,
            owner: &record.owner,
            group: record.group.as_deref(),
            size: record.size,
            timestamp: record.timestamp_string(),
            date: record.date_string(),
            time: record.time_string(),
            name: &record.name,
            remainder: &record.name,
            link: record.link.as_deref(),
            show: *show,
        }
    }
}

/// A parsed template with the listing helpers registered.  Compiled once,
/// then rendered read-only for every record.
pub struct CompiledTemplate {
    registry: Handlebars<'static>,
}

impl CompiledTemplate {
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        registry.register_helper("repeat", Box::new(repeat_helper));
        registry.register_helper("rjust", Box::new(rjust_helper));
        registry.register_helper("ljust", Box::new(ljust_helper));

        registry.register_template_string(TEMPLATE_NAME, source)?;

        Ok(CompiledTemplate { registry })
    }

    /// Render one record.  Blanks left at the end of the last line by
    /// hidden fields are dropped; the result always ends with a newline.
    pub fn render(&self, record: &Record, show: &FieldVisibility) -> Result<String, RenderError> {
        let view = EntryView::new(record, show);
        let text = self.registry.render(TEMPLATE_NAME, &view)?;
        let body = text.strip_suffix('\n').unwrap_or(&text);
        Ok(format!("{}\n", body.trim_end_matches([' ', '\t'])))
    }
}

/// Text form of a scalar helper argument
fn scalar_text(helper: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(RenderError::new(format!(
            "{}: expected a string or number",
            helper
        ))),
    }
}

fn width_param(h: &Helper, helper: &str) -> Result<usize, RenderError> {
    let width = h
        .param(1)
        .and_then(|v| v.value().as_u64())
        .ok_or_else(|| RenderError::new(format!("{}: width not found", helper)))?;
    usize::try_from(width).map_err(|_| RenderError::new(format!("{}: width too large", helper)))
}

fn repeat_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("repeat: string param not found"))?;
    let count = h
        .param(1)
        .and_then(|v| v.value().as_u64())
        .ok_or_else(|| RenderError::new("repeat: count param not found"))?;

    for _ in 0..count {
        out.write(text)?;
    }
    Ok(())
}

fn rjust_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .ok_or_else(|| RenderError::new("rjust: value param not found"))?;
    let text = scalar_text("rjust", value.value())?;
    let width = width_param(h, "rjust")?;

    out.write(&format!("{:>width$}", text, width = width))?;
    Ok(())
}

fn ljust_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .ok_or_else(|| RenderError::new("ljust: value param not found"))?;
    let text = scalar_text("ljust", value.value())?;
    let width = width_param(h, "ljust")?;

    out.write(&format!("{:<width$}", text, width = width))?;
    Ok(())
}
