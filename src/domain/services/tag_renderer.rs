//! Tag renderer
//!
//! Turns the new files of an entry into `<script>` / `<link>` attribute
//! sets and records every URL it emitted during the current cycle, so a
//! later pipeline stage can advertise them as preload hints.
//!
//! Attribute precedence, lowest to highest: global defaults, per-tag
//! defaults (script or link), caller-supplied attributes. The URL attribute
//! (`src`/`href`, plus `rel` for links) is never overridden by defaults,
//! and `integrity` always comes from the manifest. Hooks run last and may
//! change anything.

use crate::domain::entities::Tag;
use crate::domain::ports::{PackageResolver, TagAttributeHook};
use crate::domain::services::LookupRegistry;
use crate::domain::value_objects::{AssetType, Attributes, TagKind};
use crate::error::EncoreResult;

/// URLs emitted since the last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFiles {
    pub scripts: Vec<String>,
    pub styles: Vec<String>,
}

impl RenderedFiles {
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }
}

pub struct TagRenderer {
    registry: LookupRegistry,
    resolver: Box<dyn PackageResolver>,
    default_attributes: Attributes,
    default_script_attributes: Attributes,
    default_link_attributes: Attributes,
    hooks: Vec<Box<dyn TagAttributeHook>>,
    rendered: RenderedFiles,
}

impl TagRenderer {
    pub fn new(registry: LookupRegistry, resolver: Box<dyn PackageResolver>) -> Self {
        Self {
            registry,
            resolver,
            default_attributes: Attributes::new(),
            default_script_attributes: Attributes::new(),
            default_link_attributes: Attributes::new(),
            hooks: Vec::new(),
            rendered: RenderedFiles::default(),
        }
    }

    /// Attributes added to every tag (e.g. `crossorigin`).
    pub fn with_default_attributes(mut self, attributes: Attributes) -> Self {
        self.default_attributes = attributes;
        self
    }

    pub fn with_script_attributes(mut self, attributes: Attributes) -> Self {
        self.default_script_attributes = attributes;
        self
    }

    pub fn with_link_attributes(mut self, attributes: Attributes) -> Self {
        self.default_link_attributes = attributes;
        self
    }

    /// Register a hook; hooks run in registration order.
    pub fn with_hook(mut self, hook: impl TagAttributeHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn default_attributes(&self) -> &Attributes {
        &self.default_attributes
    }

    pub fn registry(&self) -> &LookupRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut LookupRegistry {
        &mut self.registry
    }

    /// Script tags for the JS files of `entry` not emitted yet this cycle.
    pub fn render_scripts(
        &mut self,
        entry: &str,
        package: Option<&str>,
        build: Option<&str>,
        extra_attributes: &Attributes,
    ) -> EncoreResult<Vec<Tag>> {
        self.render(AssetType::Js, entry, package, build, extra_attributes)
    }

    /// Stylesheet link tags for the CSS files of `entry` not emitted yet.
    pub fn render_links(
        &mut self,
        entry: &str,
        package: Option<&str>,
        build: Option<&str>,
        extra_attributes: &Attributes,
    ) -> EncoreResult<Vec<Tag>> {
        self.render(AssetType::Css, entry, package, build, extra_attributes)
    }

    pub fn rendered_scripts(&self) -> &[String] {
        &self.rendered.scripts
    }

    pub fn rendered_styles(&self) -> &[String] {
        &self.rendered.styles
    }

    pub fn rendered_files(&self) -> &RenderedFiles {
        &self.rendered
    }

    /// Clear the rendered-file records. Lookups are reset separately
    /// through [`LookupRegistry::reset_all`].
    pub fn reset(&mut self) {
        self.rendered = RenderedFiles::default();
    }

    fn render(
        &mut self,
        asset_type: AssetType,
        entry: &str,
        package: Option<&str>,
        build: Option<&str>,
        extra_attributes: &Attributes,
    ) -> EncoreResult<Vec<Tag>> {
        let kind = asset_type.tag_kind();

        let lookup = self.registry.get_mut(build)?;
        let integrity = lookup.integrity_data()?;
        let files = lookup.pending_files(entry, asset_type)?;
        // Resolve every URL before committing, so a resolver error leaves
        // the files available for a retry.
        let urls = files
            .iter()
            .map(|file| self.resolver.url(file, package))
            .collect::<EncoreResult<Vec<_>>>()?;
        lookup.mark_returned(&files);

        let mut defaults = self.default_attributes.clone();
        defaults.merge(match kind {
            TagKind::Script => &self.default_script_attributes,
            TagKind::Link => &self.default_link_attributes,
        });
        defaults.merge(extra_attributes);

        let mut tags = Vec::with_capacity(files.len());
        for (file, url) in files.into_iter().zip(urls) {
            let mut attributes = Attributes::new();
            if kind == TagKind::Link {
                attributes.insert("rel", "stylesheet");
            }
            attributes.insert(kind.url_attribute(), url.clone());
            let mut attributes = attributes.with_defaults(&defaults);

            if let Some(hash) = integrity.get(&file) {
                attributes.insert("integrity", hash.clone());
            }

            for hook in &self.hooks {
                attributes = hook.modify(kind, &url, attributes);
            }

            let emitted = attributes
                .get_str(kind.url_attribute())
                .map(str::to_string)
                .unwrap_or(url);
            match kind {
                TagKind::Script => self.rendered.scripts.push(emitted),
                TagKind::Link => self.rendered.styles.push(emitted),
            }

            tags.push(Tag::new(kind, attributes));
        }

        tracing::trace!(entry, kind = %kind, count = tags.len(), "rendered tags");
        Ok(tags)
    }
}
