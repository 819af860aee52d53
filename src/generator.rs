use crate::config::{Config, PageConfig};
use crate::error::{Error, Result};
use crate::render::RenderedPage;
use colored::*;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, instrument, span, warn, Level};

const INDEX_FILENAME: &str = "index.html";

const INDEX_TEMPLATE: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
    <meta charset=\"UTF-8\">\n\
    <title>Pages Index</title>\n\
</head>\n\
<body>\n\
    <h1>Pages Index</h1>\n\
    <p>{{PAGE_COUNT}} pages generated.</p>\n\
    <ul>\n\
{{PAGE_ITEMS}}    </ul>\n\
</body>\n\
</html>\n";

// ###################################################### //
//                   Generator Struct                     //
// ###################################################### //

pub struct Generator {
    config: Config,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct GenerationSummary {
    pub count: usize,
    pub output_dir: PathBuf,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generates one file per page, in config order. Aborts on the first
    /// write failure; files written before the failure are left in place.
    #[instrument(skip_all, ret(level = Level::TRACE), err(Display))]
    pub fn generate_pages(&self) -> Result<GenerationSummary> {
        fs::create_dir_all(&self.config.output_dir).map_err(|source| Error::CreateOutputDir {
            path: self.config.output_dir.display().to_string(),
            source,
        })?;

        if self.config.pages.is_empty() {
            debug!("no pages in config, nothing to generate");
        }

        let mut seen = HashSet::new();
        let mut count = 0;

        for page in &self.config.pages {
            let span = span!(
                Level::INFO,
                "page",
                id = %page.element_id,
                file = %page.filename
            );

            let _enter = span.enter();

            // Filenames are unique by convention only. Last writer wins.
            if !seen.insert(page.filename.as_str()) {
                warn!("filename appears more than once, overwriting");
            }

            let file_path = self.write_page(page)?;
            count += 1;

            println!(
                "[ID:{}] :: Generated {} - {}",
                page.element_id,
                page.title.purple(),
                file_path.display()
            );
        }

        if self.config.index {
            let index_path = self.write_index()?;
            println!(
                "[INDEX] :: Generated {} - {}",
                "Pages Index".purple(),
                index_path.display()
            );
        }

        Ok(GenerationSummary {
            count,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn write_page(&self, page: &PageConfig) -> Result<PathBuf> {
        let rendered = RenderedPage::new(&self.config.template, page);
        let file_path = self.config.output_dir.join(&rendered.filename);

        fs::write(&file_path, &rendered.html).map_err(|source| Error::WritePage {
            filename: rendered.filename,
            source,
        })?;

        Ok(file_path)
    }

    // An index.html linking every page in the config, built with the same
    // token replacement the pages themselves use.
    fn write_index(&self) -> Result<PathBuf> {
        let mut items = String::new();

        for page in &self.config.pages {
            items.push_str(&format!(
                "        <li><a href=\"{}\">{}</a> <span class=\"element-id\">{}</span></li>\n",
                page.filename, page.title, page.element_id
            ));
        }

        let html = INDEX_TEMPLATE
            .replace("{{PAGE_COUNT}}", &self.config.pages.len().to_string())
            .replace("{{PAGE_ITEMS}}", &items);

        let file_path = self.config.output_dir.join(INDEX_FILENAME);

        fs::write(&file_path, html).map_err(|source| Error::WritePage {
            filename: INDEX_FILENAME.to_string(),
            source,
        })?;

        Ok(file_path)
    }
}
