use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use syllabus::catalog::{self, Course};
use syllabus::demo::{self, Direction};
use syllabus::explain::{self, Explainer};
use syllabus::export;
use syllabus::highlight::highlight;
use syllabus::i18n::{Lang, Phrases};
use syllabus::search;
use syllabus::settings::{Settings, Theme};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let mut settings = load_settings();
    settings.apply_env();
    // Flags outrank the environment and the saved file, for this run only;
    // `config` is the subcommand that persists them.
    if let Some(value) = cli.theme.as_deref() {
        settings.theme = parse_theme_override(value)?;
    }
    if let Some(value) = cli.lang.as_deref() {
        settings.lang = value
            .parse::<Lang>()
            .map_err(|e| invalid_input(e.to_string()))?;
    }
    display::set_theme(settings.theme);
    let phrases = settings.lang.phrases();

    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Commands::Search {
            query,
            limit,
            scores,
        } => run_search(&query, catalog_path, limit, scores, settings.lang),
        Commands::List { category } => run_list(catalog_path, category.as_deref(), phrases),
        Commands::Show { id } => run_show(&id, catalog_path, phrases),
        Commands::Export { id, format, output } => {
            run_export(&id, &format, output.as_deref(), catalog_path)
        }
        Commands::Explain {
            id,
            module,
            dry_run,
        } => run_explain(&id, &module, catalog_path, dry_run, phrases),
        Commands::Demo => run_demo(),
        Commands::Config => run_config(cli.theme.as_deref(), cli.lang.as_deref(), settings),
    }
}

/// "auto" clears the theme back to terminal detection; anything else must
/// name a real theme.
fn parse_theme_override(value: &str) -> io::Result<Option<Theme>> {
    if value.eq_ignore_ascii_case("auto") {
        Ok(None)
    } else {
        let theme = value
            .parse::<Theme>()
            .map_err(|e| invalid_input(e.to_string()))?;
        Ok(Some(theme))
    }
}

/// Load saved preferences. A corrupt settings file gets a warning and
/// defaults rather than killing a search over it.
fn load_settings() -> Settings {
    let Some(path) = Settings::default_path() else {
        return Settings::default();
    };
    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("warning: ignoring settings at {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Load the catalog from `--catalog` or fall back to the embedded one.
fn load_catalog(path: Option<&str>) -> io::Result<Vec<Course>> {
    match path {
        Some(path) => catalog::load(Path::new(path)),
        None => catalog::builtin(),
    }
}

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

fn find_course<'a>(courses: &'a [Course], id: &str) -> io::Result<&'a Course> {
    catalog::find_by_id(courses, id)
        .ok_or_else(|| invalid_input(format!("no course with id '{}' (try `syllabus list`)", id)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    query: &str,
    catalog_path: Option<&str>,
    limit: usize,
    show_scores: bool,
    lang: Lang,
) -> io::Result<()> {
    let phrases = lang.phrases();
    let courses = load_catalog(catalog_path)?;
    let hits = search::rank_scored(&courses, query);

    if hits.is_empty() {
        println!("{}", display::themed(display::GRAY, &[], phrases.no_results));
        return Ok(());
    }

    let header = if query.trim().is_empty() {
        phrases.all_courses.to_string()
    } else {
        format!("{} \"{}\"", phrases.results_for, query.trim())
    };
    display::section_top(&header);

    for (position, hit) in hits.iter().take(limit).enumerate() {
        let course = hit.course;
        let title_spans = highlight(&course.title, query);
        let mut line = format!(
            "  {:>2}. {} {}",
            position + 1,
            display::category_badge(&course.category),
            display::pad_right(&display::highlighted(&title_spans), 34),
        );
        line.push_str(&format!(
            " {}  {} {}",
            display::level_label(&course.level.to_string()),
            course.modules.len(),
            phrases.modules.to_lowercase(),
        ));
        if show_scores {
            line.push_str(&format!("  {}", display::score_value(hit.score)));
        }
        display::row(&line);

        // Modules whose titles contain the query phrase, highlighted.
        for module in &course.modules {
            let spans = highlight(&module.title, query);
            if spans.iter().any(|s| s.matched) {
                display::row(&format!("        - {}", display::highlighted(&spans)));
            }
        }
    }
    display::section_bot();

    let total = hits.len();
    if total > limit {
        println!(
            "{}",
            display::themed(display::GRAY, &[], &lang.shown_of_matched(limit, total))
        );
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// LIST / SHOW
// ═══════════════════════════════════════════════════════════════════════════

fn run_list(
    catalog_path: Option<&str>,
    category: Option<&str>,
    phrases: &Phrases,
) -> io::Result<()> {
    let courses = load_catalog(catalog_path)?;
    let filtered: Vec<&Course> = courses
        .iter()
        .filter(|c| category.is_none_or(|tag| c.category.eq_ignore_ascii_case(tag)))
        .collect();

    if filtered.is_empty() {
        println!("{}", display::themed(display::GRAY, &[], phrases.no_results));
        return Ok(());
    }

    display::section_top(phrases.all_courses);
    for course in &filtered {
        display::row(&format!(
            "  {} {} {} ({} {})",
            display::category_badge(&course.category),
            display::pad_right(&display::styled(&[display::BOLD], &course.title), 30),
            display::level_label(&course.level.to_string()),
            course.modules.len(),
            phrases.modules.to_lowercase(),
        ));
        display::row(&format!(
            "        {}",
            display::themed(display::GRAY, &[], &format!("id: {}", course.id))
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_show(id: &str, catalog_path: Option<&str>, phrases: &Phrases) -> io::Result<()> {
    let courses = load_catalog(catalog_path)?;
    let course = find_course(&courses, id)?;

    display::section_top(&course.title);
    display::row(&format!(
        "  {} {}: {}   {}: {}",
        display::category_badge(&course.category),
        phrases.level,
        display::level_label(&course.level.to_string()),
        phrases.category,
        course.category,
    ));
    display::row(&format!("  {}", course.description));
    display::section_mid(phrases.modules);
    for module in &course.modules {
        display::row(&format!(
            "  {} {}",
            display::styled(&[display::BOLD], &module.title),
            display::themed(display::GRAY, &[], &format!("({})", module.id)),
        ));
        display::row(&format!("    {}", module.description));
        if let Some(code) = &module.code {
            for line in code.body.lines() {
                display::row(&format!(
                    "      {}",
                    display::styled(&[display::DIM], line)
                ));
            }
        }
    }
    display::section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPORT
// ═══════════════════════════════════════════════════════════════════════════

fn run_export(
    id: &str,
    format: &str,
    output: Option<&str>,
    catalog_path: Option<&str>,
) -> io::Result<()> {
    let courses = load_catalog(catalog_path)?;
    let course = find_course(&courses, id)?;

    let rendered = match format.to_ascii_lowercase().as_str() {
        "markdown" | "md" => export::course_markdown(course),
        "json" => export::course_json(course)?,
        other => {
            return Err(invalid_input(format!(
                "unknown export format '{}' (expected markdown or json)",
                other
            )))
        }
    };

    match output {
        Some(path) => {
            let path = PathBuf::from(path);
            fs::write(&path, rendered.as_bytes())?;
            eprintln!("✓ wrote {} ({} bytes)", path.display(), rendered.len());
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPLAIN
// ═══════════════════════════════════════════════════════════════════════════

fn run_explain(
    id: &str,
    module_id: &str,
    catalog_path: Option<&str>,
    dry_run: bool,
    phrases: &Phrases,
) -> io::Result<()> {
    let courses = load_catalog(catalog_path)?;
    let course = find_course(&courses, id)?;
    let module = course
        .modules
        .iter()
        .find(|m| m.id == module_id)
        .ok_or_else(|| {
            invalid_input(format!(
                "no module '{}' in course '{}' (try `syllabus show {}`)",
                module_id, id, id
            ))
        })?;

    let prompt = explain::explain_prompt(&course.title, module).ok_or_else(|| {
        invalid_input(format!("module '{}' has no code sample to explain", module_id))
    })?;

    if dry_run {
        println!("{}", prompt);
        return Ok(());
    }

    let answer = request_explanation(&prompt, phrases).map_err(io::Error::other)?;

    display::section_top(phrases.explain_code);
    for line in answer.lines() {
        display::row(&format!("  {}", line));
    }
    display::section_bot();
    Ok(())
}

#[cfg(feature = "http-explain")]
fn request_explanation(
    prompt: &str,
    _phrases: &Phrases,
) -> Result<String, explain::ExplainError> {
    let config = explain::ExplainConfig::from_env()?;
    explain::HttpExplainer::new(config)?.explain(prompt)
}

#[cfg(not(feature = "http-explain"))]
fn request_explanation(
    prompt: &str,
    phrases: &Phrases,
) -> Result<String, explain::ExplainError> {
    use syllabus::explain::StaticExplainer;

    // Built without HTTP support; answer with the canned fallback and say so.
    eprintln!("{}", phrases.explain_unavailable);
    StaticExplainer::default().explain(prompt)
}

// ═══════════════════════════════════════════════════════════════════════════
// DEMO
// ═══════════════════════════════════════════════════════════════════════════

fn run_demo() -> io::Result<()> {
    let arena = demo::Arena::default();
    let mut pos = arena.start();

    println!("{}", demo::render(&arena, pos));
    println!("move with w/a/s/d or h/j/k/l + enter, q quits");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let key = line.trim();
        if key.eq_ignore_ascii_case("q") || key.eq_ignore_ascii_case("quit") {
            break;
        }
        match Direction::from_key(key) {
            Some(dir) => pos = demo::step(&arena, pos, dir),
            None => {
                println!("unknown key '{}' (w/a/s/d, h/j/k/l, or q)", key);
                continue;
            }
        }
        println!("{}", demo::render(&arena, pos));
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG
// ═══════════════════════════════════════════════════════════════════════════

fn run_config(theme: Option<&str>, lang: Option<&str>, mut settings: Settings) -> io::Result<()> {
    let path = Settings::default_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::Unsupported,
            "no config directory on this platform",
        )
    })?;

    if theme.is_none() && lang.is_none() {
        let theme_shown = match settings.theme {
            Some(Theme::Dark) => "dark",
            Some(Theme::Light) => "light",
            None => "auto",
        };
        println!("settings file: {}", path.display());
        println!("theme: {}", theme_shown);
        println!("lang:  {}", settings.lang.code());
        return Ok(());
    }

    if let Some(value) = theme {
        settings.theme = parse_theme_override(value)?;
    }
    if let Some(value) = lang {
        settings.lang = value
            .parse::<Lang>()
            .map_err(|e| invalid_input(e.to_string()))?;
    }

    settings.save(&path)?;
    eprintln!("✓ saved to {}", path.display());
    Ok(())
}
