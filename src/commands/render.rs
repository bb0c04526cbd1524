use std::path::Path;

use anyhow::Result;

use encore_entrypoints::application::Encore;
use encore_entrypoints::domain::value_objects::Attributes;
use encore_entrypoints::error::EncoreResult;
use encore_entrypoints::presentation::cli::RenderKind;
use encore_entrypoints::presentation::factory::create_runtime;
use encore_entrypoints::presentation::output::emit;

use super::load_config;

pub struct RenderArgs<'a> {
    pub entry: &'a str,
    pub build: Option<&'a str>,
    pub package: Option<&'a str>,
    pub kind: RenderKind,
    pub preload: bool,
}

pub fn cmd_render(config_path: &Path, args: RenderArgs<'_>, json: bool) -> Result<()> {
    let config = load_config(config_path, json)?;
    let preload = args.preload || config.preload;
    let mut encore = create_runtime(&config).with_preload(preload);

    let blocks = match render_blocks(&mut encore, &args) {
        Ok(blocks) => blocks,
        Err(e) => {
            encore.fail_response();
            return Err(e.into());
        }
    };

    let link = encore.finish_response(None);

    let html = blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if json {
        emit(serde_json::json!({
            "event": "render",
            "entry": args.entry,
            "build": args.build,
            "html": html,
            "link": link,
        }))?;
        return Ok(());
    }

    if !html.is_empty() {
        println!("{}", html);
    }
    if let Some(link) = link {
        println!("Link: {}", link);
    }
    Ok(())
}

fn render_blocks(encore: &mut Encore, args: &RenderArgs<'_>) -> EncoreResult<Vec<String>> {
    let extra = Attributes::new();
    let mut blocks = Vec::new();
    if args.kind != RenderKind::Css {
        blocks.push(encore.script_tags(args.entry, args.package, args.build, &extra)?);
    }
    if args.kind != RenderKind::Js {
        blocks.push(encore.link_tags(args.entry, args.package, args.build, &extra)?);
    }
    Ok(blocks)
}
