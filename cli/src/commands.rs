use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use alifba_core::render::{CARD_CLASS, FORMS_CLASS, MAIN_LETTER_CLASS};
use alifba_core::{Document, MemoryDocument, NodeId, RecordingPlayer, SilentPlayer, mount};
use alifba_types::{ClipKind, FormPosition};
use anyhow::Context;

use crate::CliContext;

/// Outcome of scanning an asset root for the clips the dataset refers to
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AssetReport {
    /// Distinct clip paths looked up
    pub checked: usize,
    pub missing: Vec<PathBuf>,
}

impl AssetReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Print the dataset as a table
pub fn list_letters(ctx: &CliContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let positions: Vec<&str> = FormPosition::all().iter().map(|p| p.label()).collect();
    writeln!(
        out,
        "  #  char  {:<8} {:<6} {}",
        "name",
        "sound",
        positions.join(" | ")
    )?;
    for (index, letter) in ctx.alphabet.iter().enumerate() {
        let forms: Vec<&str> = FormPosition::all()
            .iter()
            .map(|&position| letter.form(position))
            .collect();
        writeln!(
            out,
            "{index:>3}  {}     {:<8} {:<6} {}",
            letter.glyph,
            letter.name,
            letter.sound.as_deref().unwrap_or("-"),
            forms.join(" | "),
        )?;
    }
    Ok(())
}

/// Print dataset issues. Returns false when there are any.
pub fn validate(ctx: &CliContext, out: &mut dyn Write) -> anyhow::Result<bool> {
    let issues = ctx.alphabet.issues();
    if issues.is_empty() {
        writeln!(out, "{} letters, no issues", ctx.alphabet.len())?;
        return Ok(true);
    }

    for issue in issues {
        writeln!(out, "warning: {issue}")?;
    }
    writeln!(
        out,
        "{} letters, {} issue(s)",
        ctx.alphabet.len(),
        issues.len()
    )?;
    Ok(false)
}

/// Look up every name and sound clip under `root`
pub fn scan_assets(ctx: &CliContext, root: &Path) -> AssetReport {
    let mut seen = HashSet::new();
    let mut report = AssetReport::default();

    for letter in &ctx.alphabet {
        for kind in [ClipKind::Name, ClipKind::Sound] {
            let relative = letter.clip_path(kind, &ctx.config.audio);
            if !seen.insert(relative.clone()) {
                continue;
            }

            report.checked += 1;
            let path = root.join(&relative);
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "Missing clip");
                report.missing.push(path);
            }
        }
    }

    report
}

/// Print missing clips under `root`. Returns false when any are missing.
pub fn check_assets(ctx: &CliContext, root: &Path, out: &mut dyn Write) -> anyhow::Result<bool> {
    let report = scan_assets(ctx, root);
    for path in &report.missing {
        writeln!(out, "missing: {}", path.display())?;
    }
    writeln!(
        out,
        "{} clip(s) checked, {} missing",
        report.checked,
        report.missing.len()
    )?;
    Ok(report.is_complete())
}

/// A blank page holding only the grid container
fn blank_page(ctx: &CliContext) -> anyhow::Result<(MemoryDocument, NodeId)> {
    let doc = MemoryDocument::new();
    let container = doc.create_element_with_id("div", &ctx.config.container_id);
    doc.set_class_name(&container, "row");
    doc.append_child(&doc.body(), &container)?;
    Ok((doc, container))
}

/// Render the grid and print the resulting markup
pub fn preview(ctx: &CliContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let (doc, container) = blank_page(ctx)?;
    mount(&doc, ctx.alphabet.letters(), &ctx.config, Rc::new(SilentPlayer))?;
    write!(out, "{}", doc.to_html(container))?;
    Ok(())
}

/// Render the grid, click a letter `times` times and return the playback
/// requests that produced.
///
/// `None` clicks the main glyph.
pub fn simulate_clicks(
    ctx: &CliContext,
    name: &str,
    form: Option<FormPosition>,
    times: u32,
) -> anyhow::Result<Vec<String>> {
    let (index, _) = ctx
        .alphabet
        .find(name)
        .with_context(|| format!("no letter named `{name}`"))?;

    let (doc, container) = blank_page(ctx)?;
    let player = Rc::new(RecordingPlayer::new());
    mount(&doc, ctx.alphabet.letters(), &ctx.config, player.clone())?;

    let card = *doc
        .find_by_class(container, CARD_CLASS)
        .get(index)
        .context("card missing from rendered grid")?;

    let target = match form {
        None => doc.find_by_class(card, MAIN_LETTER_CLASS).first().copied(),
        Some(position) => doc
            .find_by_class(card, FORMS_CLASS)
            .first()
            .and_then(|forms| doc.children(*forms).get(position.index()).copied()),
    }
    .with_context(|| match form {
        Some(position) => format!("letter `{name}` has no {} form", position.label()),
        None => format!("letter `{name}` has no main glyph"),
    })?;

    for _ in 0..times {
        doc.click(target);
    }
    Ok(player.take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alifba_core::{Alphabet, Letter};

    fn builtin() -> CliContext {
        CliContext::load(None).unwrap()
    }

    fn two_letters() -> CliContext {
        CliContext::with_alphabet(Alphabet::from_letters(vec![
            Letter::new("ب", "ba", Some("b"), ["بـ", "ـبـ", "ـب"]),
            Letter::new("ت", "ta", Some("t"), ["تـ", "ـتـ", "ـت"]),
        ]))
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_list_letters_prints_every_letter() {
        let mut out = Vec::new();
        list_letters(&builtin(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 29);
        assert!(text.lines().next().unwrap().ends_with("initial | medial | final"));
        assert!(text.contains("ba"));
        assert!(text.contains("بـ | ـبـ | ـب"));
    }

    #[test]
    fn test_validate_reports_builtin_issues() {
        let mut out = Vec::new();
        let clean = validate(&builtin(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!clean);
        assert!(text.contains("laam"));
        assert!(text.contains("nameSound"));
        assert!(text.ends_with("28 letters, 2 issue(s)\n"));
    }

    #[test]
    fn test_validate_clean_dataset() {
        let mut out = Vec::new();
        assert!(validate(&two_letters(), &mut out).unwrap());
    }

    #[test]
    fn test_scan_assets_finds_missing_clips() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "audio/names/ba.mp3");
        touch(dir.path(), "audio/sounds/b.mp3");
        touch(dir.path(), "audio/names/ta.mp3");

        let report = scan_assets(&two_letters(), dir.path());
        assert_eq!(report.checked, 4);
        assert_eq!(report.missing, vec![dir.path().join("audio/sounds/t.mp3")]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_check_assets_complete_tree() {
        let dir = tempfile::tempdir().unwrap();
        for clip in [
            "audio/names/ba.mp3",
            "audio/sounds/b.mp3",
            "audio/names/ta.mp3",
            "audio/sounds/t.mp3",
        ] {
            touch(dir.path(), clip);
        }

        let mut out = Vec::new();
        assert!(check_assets(&two_letters(), dir.path(), &mut out).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "4 clip(s) checked, 0 missing\n"
        );
    }

    #[test]
    fn test_scan_builtin_expects_56_clips() {
        let dir = tempfile::tempdir().unwrap();
        let report = scan_assets(&builtin(), dir.path());
        assert_eq!(report.checked, 56);
        assert!(
            report
                .missing
                .contains(&dir.path().join("audio/sounds/.mp3"))
        );
    }

    #[test]
    fn test_preview_renders_all_cards() {
        let mut out = Vec::new();
        preview(&builtin(), &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.starts_with("<div id=\"lettersContainer\" class=\"row\">"));
        assert_eq!(html.matches("class=\"letter-card\"").count(), 28);
        assert_eq!(html.matches("<span>").count(), 84);
    }

    #[test]
    fn test_simulate_main_and_form_clicks() {
        let ctx = builtin();
        assert_eq!(
            simulate_clicks(&ctx, "ba", None, 1).unwrap(),
            vec!["audio/names/ba.mp3"]
        );
        assert_eq!(
            simulate_clicks(&ctx, "ba", Some(FormPosition::Medial), 3).unwrap(),
            vec!["audio/sounds/b.mp3"; 3]
        );
    }

    #[test]
    fn test_simulate_every_form_position() {
        let ctx = two_letters();
        for &position in FormPosition::all() {
            assert_eq!(
                simulate_clicks(&ctx, "ta", Some(position), 1).unwrap(),
                vec!["audio/sounds/t.mp3"]
            );
        }
    }

    #[test]
    fn test_simulate_later_letter_targets_its_own_card() {
        // laam has no sound, so its form clicks resolve to an empty identifier
        assert_eq!(
            simulate_clicks(&builtin(), "laam", Some(FormPosition::Final), 1).unwrap(),
            vec!["audio/sounds/.mp3"]
        );
    }

    #[test]
    fn test_simulate_unknown_letter() {
        let ctx = builtin();
        let err = simulate_clicks(&ctx, "omega", None, 1).unwrap_err();
        assert_eq!(err.to_string(), "no letter named `omega`");
        assert!(simulate_clicks(&ctx, "", Some(FormPosition::Initial), 1).is_err());
    }

    #[test]
    fn test_custom_container_id() {
        let mut ctx = two_letters();
        ctx.config.container_id = "grid".to_string();

        let mut out = Vec::new();
        preview(&ctx, &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<div id=\"grid\" class=\"row\">"));
        assert_eq!(html.matches("class=\"letter-card\"").count(), 2);

        assert_eq!(
            simulate_clicks(&ctx, "ta", None, 2).unwrap(),
            vec!["audio/names/ta.mp3"; 2]
        );
    }
}
