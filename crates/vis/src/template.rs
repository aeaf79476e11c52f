//! Renders the page templates.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;

pub(crate) const INDEX_TEMPLATE: &str = "index";
pub(crate) const CHARTS_TEMPLATE: &str = "charts";

pub(crate) struct TemplateEngine {
    template: TinyTemplate<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<TemplateEngine> {
        let mut template = TinyTemplate::new();
        template.add_template(INDEX_TEMPLATE, include_str!("./template/index.html.tt"))?;
        template.add_template(CHARTS_TEMPLATE, include_str!("./template/charts.html.tt"))?;

        Ok(Self { template })
    }

    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String> {
        Ok(self.template.render(name, context)?)
    }

    pub fn render_to_file<C: Serialize>(&self, name: &str, context: &C, path: &Path) -> Result<()> {
        let text = self.render(name, context)?;
        let mut file = File::create(path)?;

        file.write_all(text.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}
