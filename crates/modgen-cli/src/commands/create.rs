//! Implementation of `modgen module:structure:create`.
//!
//! Responsibility: pick adapters from flags and config, call the core
//! scaffolder, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use modgen_adapters::{
    DirectoryTemplates, DiscoveringPathResolver, EmbeddedTemplates, FixedPathResolver,
    LocalFilesystem,
};
use modgen_core::application::{
    ModuleScaffolder, PathResolver, ScaffoldOutcome, ScaffoldPlan, TemplateStore,
};

use crate::{cli::CreateArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the create command.
///
/// Dispatch sequence:
/// 1. Choose the path resolver and template store
/// 2. Early-exit with a plan if `--dry-run`
/// 3. Run the scaffolder, streaming progress to the output
/// 4. Print the final outcome line
#[instrument(skip_all, fields(module = %args.module_name))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let scaffolder = build_scaffolder(&args, &config)?;

    if args.dry_run {
        let plan = scaffolder.plan(&args.module_name)?;
        return show_plan(&plan, &output);
    }

    let outcome = scaffolder.run(&args.module_name, &output)?;
    info!(path = %outcome.path().display(), created = outcome.is_created(), "Create finished");

    match outcome {
        ScaffoldOutcome::Created { .. } => output.success(&outcome.message())?,
        ScaffoldOutcome::AlreadyExists { .. } => output.info(&outcome.message())?,
    }

    Ok(())
}

// ── Adapter selection ─────────────────────────────────────────────────────────

fn build_scaffolder(args: &CreateArgs, config: &AppConfig) -> CliResult<ModuleScaffolder> {
    let resolver = select_resolver(args.app_dir.as_ref().or(config.paths.app_dir.as_ref()))?;
    let templates = select_templates(
        args.templates
            .as_ref()
            .or(config.templates.local_path.as_ref()),
    );

    Ok(ModuleScaffolder::new(
        resolver,
        Box::new(LocalFilesystem::new()),
        templates,
    ))
}

fn select_resolver(app_dir: Option<&PathBuf>) -> CliResult<Box<dyn PathResolver>> {
    match app_dir {
        Some(dir) => {
            debug!(app_dir = %dir.display(), "Using configured application directory");
            Ok(Box::new(FixedPathResolver::new(dir)))
        }
        None => Ok(Box::new(DiscoveringPathResolver::from_current_dir()?)),
    }
}

fn select_templates(dir: Option<&PathBuf>) -> Box<dyn TemplateStore> {
    match dir {
        Some(dir) => {
            debug!(templates = %dir.display(), "Using template directory");
            Box::new(DirectoryTemplates::new(dir, LocalFilesystem::new()))
        }
        None => Box::new(EmbeddedTemplates::new()),
    }
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    let root = plan.structure.root();

    if plan.already_exists {
        output.info(&format!("Module {} already exist!", plan.identifier))?;
        return Ok(());
    }

    output.header(&format!(
        "Dry run: would create '{}' at {}",
        plan.identifier,
        root.display()
    ))?;
    for dir in plan.structure.directories() {
        output.print(&format!("  {}/", dir.display()))?;
    }
    for file in plan.structure.files() {
        output.print(&format!(
            "  {} ({} bytes)",
            plan.structure.target_of(file).display(),
            file.size()
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn args(app_dir: Option<&str>, templates: Option<&str>) -> CreateArgs {
        CreateArgs {
            module_name: "Foo_Bar".into(),
            app_dir: app_dir.map(PathBuf::from),
            templates: templates.map(PathBuf::from),
            dry_run: false,
        }
    }

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.paths.app_dir = Some(PathBuf::from("/from/config"));

        let scaffolder = build_scaffolder(&args(Some("/from/flag"), None), &config).unwrap();
        let plan = scaffolder.plan("Foo_Bar").unwrap();
        assert_eq!(plan.structure.root(), Path::new("/from/flag/code/Foo/Bar"));
    }

    #[test]
    fn config_used_without_flag() {
        let mut config = AppConfig::default();
        config.paths.app_dir = Some(PathBuf::from("/from/config"));

        let scaffolder = build_scaffolder(&args(None, None), &config).unwrap();
        let plan = scaffolder.plan("Foo_Bar").unwrap();
        assert_eq!(plan.structure.root(), Path::new("/from/config/code/Foo/Bar"));
    }

    #[test]
    fn template_dir_from_config() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("module.xml.template"), "M {VendorName_ModuleName}")
            .unwrap();
        std::fs::write(tmp.path().join("registration.php.template"), "R").unwrap();

        let mut config = AppConfig::default();
        config.templates.local_path = Some(tmp.path().to_path_buf());

        let scaffolder = build_scaffolder(&args(Some("/app"), None), &config).unwrap();
        let plan = scaffolder.plan("Foo_Bar").unwrap();
        let contents: Vec<_> = plan.structure.files().map(|f| f.content.as_str()).collect();
        assert_eq!(contents, vec!["M Foo_Bar", "R"]);
    }
}
