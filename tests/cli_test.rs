use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_ui-translate"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_translate_prints_confirmation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("a.tsx"), r#"<b>Cancel</b> "Login""#)?;

    let output = run_in(temp_dir.path(), &["a.tsx"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Translated file saved to: a_translated.tsx\n"
    );
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("a_translated.tsx"))?,
        r#"<b>Cancelar</b> "Entrar""#
    );
    Ok(())
}

#[test]
fn test_default_paths() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir_all(temp_dir.path().join("src/pages"))?;
    std::fs::write(temp_dir.path().join("src/pages/Admin.tsx"), "<h1>Admin Panel</h1>")?;

    let output = run_in(temp_dir.path(), &[])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Admin_translated.tsx"));
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("src/pages/Admin_translated.tsx"))?,
        "<h1>Painel Administrativo</h1>"
    );
    Ok(())
}

#[test]
fn test_missing_input_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_in(temp_dir.path(), &["missing.tsx"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Could not read 'missing.tsx'"));
    assert!(!temp_dir.path().join("missing_translated.tsx").exists());
    Ok(())
}

#[test]
fn test_unwritable_output_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("a.tsx"), "'Save'")?;

    let output = run_in(temp_dir.path(), &["a.tsx", "no/such/dir/out.tsx"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Could not write 'no/such/dir/out.tsx'"));
    assert!(!temp_dir.path().join("no").exists());
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("a.tsx"), "<b>Cancel</b> <i>Cancel</i>")?;

    let output = run_in(temp_dir.path(), &["a.tsx", "--dry-run"])?;

    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.contains("Dry run"));
    assert!(printed.contains("Cancel -> Cancelar"));
    assert!(printed.contains("Total replacements: 2"));
    assert!(!printed.contains("Translated file saved"));
    assert!(!temp_dir.path().join("a_translated.tsx").exists());
    Ok(())
}

#[test]
fn test_print_builtin_mapping_has_table_header() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_in(temp_dir.path(), &["--print-mapping"])?;

    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.starts_with("[table]"));
    assert!(printed.contains(r#"name = "admin-pt-br""#));
    assert!(printed.contains(r#"locale = "pt-BR""#));
    assert!(printed.contains(r#"source = "Admin Login""#));
    Ok(())
}

#[test]
fn test_print_loaded_mapping_keeps_header() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("checkout.toml"),
        "[table]\nname = \"checkout\"\n\n[[phrases]]\nsource = \"Back\"\ntarget = \"Voltar\"\n",
    )?;

    let output = run_in(
        temp_dir.path(),
        &["--mapping", "checkout.toml", "--print-mapping"],
    )?;

    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.contains(r#"name = "checkout""#));
    assert!(printed.contains(r#"target = "Voltar""#));
    assert!(!printed.contains("admin-pt-br"));
    Ok(())
}

#[test]
fn test_chained_entries_are_warned_about() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("chain.toml"),
        r#"
[[phrases]]
source = "Save"
target = "Salvar"

[[phrases]]
source = "Salvar"
target = "Gravar"
"#,
    )?;
    std::fs::write(temp_dir.path().join("a.tsx"), "<b>Save</b>")?;

    let output = run_in(temp_dir.path(), &["a.tsx", "--mapping", "chain.toml"])?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("which the later entry 'Salvar' rewrites to 'Gravar'"));
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("a_translated.tsx"))?,
        "<b>Gravar</b>"
    );
    Ok(())
}

#[test]
fn test_invalid_phrase_table_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("bad.toml"), "[[phrases]\nsource = ")?;
    std::fs::write(temp_dir.path().join("a.tsx"), "'Save'")?;

    let output = run_in(temp_dir.path(), &["a.tsx", "--mapping", "bad.toml"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("a_translated.tsx").exists());
    Ok(())
}
