use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::tempdir;

const HERO_PAGE: &str = r#"export default function Catalog() {
  return (
    <section>
      <video autoPlay muted loop playsInline>
          <source src="/assets/video/videosworking/hero.mp4" type="video/mp4" />
        </video>
    </section>
  );
}
"#;

fn write_page(root: &Path, file: &str, content: &str) {
    let path = root.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn rewrite(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("responsive-video-rewrite").unwrap();
    cmd.arg("--root").arg(root);
    cmd
}

#[test]
fn help_works() {
    let mut cmd = Command::cargo_bin("responsive-video-rewrite").unwrap();
    cmd.arg("--help").assert().success();
}

#[test]
fn missing_pages_exit_with_failure() {
    let root = tempdir().unwrap();

    let output = rewrite(root.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("WARNING:  File not found: pages/DoubleWide.tsx"));
    assert!(stdout.contains("Successfully updated: 0"));
    assert!(stdout.contains("Failed or skipped: 10"));
    assert!(!stdout.contains("Next steps"));
}

#[test]
fn rewrites_page_and_keeps_backup() {
    let root = tempdir().unwrap();
    write_page(root.path(), "pages/Catalog.tsx", HERO_PAGE);

    let output = rewrite(root.path()).output().unwrap();

    // The other nine pages are missing
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Backup created: pages/Catalog.tsx.backup"));
    assert!(stdout.contains("SUCCESS: Updated pages/Catalog.tsx"));
    assert!(stdout.contains("Successfully updated: 1"));
    assert!(stdout.contains("bash scripts/reencode-videos-1080p.sh"));

    let page = fs::read_to_string(root.path().join("pages/Catalog.tsx")).unwrap();
    assert!(page.contains("/assets/video/responsive/desktop/hero.mp4"));
    assert!(page.contains("/assets/video/responsive/mobile/hero.mp4"));
    assert!(!page.contains("/assets/video/videosworking/hero.mp4"));

    let backup = fs::read_to_string(root.path().join("pages/Catalog.tsx.backup")).unwrap();
    assert_eq!(backup, HERO_PAGE);
}

#[test]
fn rerun_reports_pattern_not_found_and_keeps_backup() {
    let root = tempdir().unwrap();
    write_page(root.path(), "pages/Catalog.tsx", HERO_PAGE);

    rewrite(root.path()).output().unwrap();
    let output = rewrite(root.path()).output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("WARNING:  Pattern not found in pages/Catalog.tsx"));
    assert!(!stdout.contains("Backup created"));

    let backup = fs::read_to_string(root.path().join("pages/Catalog.tsx.backup")).unwrap();
    assert_eq!(backup, HERO_PAGE);
}

#[test]
fn all_pages_updated_exits_zero() {
    let root = tempdir().unwrap();
    let pages = [
        ("pages/DoubleWide.tsx", "/assets/video/videosworking/doublewide-hero.mp4"),
        ("pages/SingleWide.tsx", "/assets/video/videosworking/singewidehomepage.mp4"),
        ("pages/Modular.tsx", "/assets/video/videosworking/modularhomes.mp4"),
        ("pages/Contact.tsx", "/assets/images/awards/contact.mp4"),
        ("pages/LandHome.tsx", "/assets/video/videosworking/land.mp4"),
        ("pages/Catalog.tsx", "/assets/video/videosworking/hero.mp4"),
        ("pages/About.tsx", "/assets/images/awards/about page.mp4"),
        ("pages/Manufacturers.tsx", "/assets/images/awards/manufactures.mp4"),
        ("pages/Insurance.tsx", "/assets/video/videosworking/finance.mp4"),
        ("pages/Deals.tsx", "/assets/video/videosworking/deal.mp4"),
    ];
    for (file, src) in pages {
        write_page(
            root.path(),
            file,
            &format!(r#"<source src="{}" type="video/mp4" />"#, src),
        );
    }

    rewrite(root.path()).assert().success();

    let contact = fs::read_to_string(root.path().join("pages/Contact.tsx")).unwrap();
    assert!(contact.contains("/assets/video/responsive/mobile/land.mp4"));
    let about = fs::read_to_string(root.path().join("pages/About.tsx")).unwrap();
    assert!(about.contains("/assets/video/responsive/desktop/1204.mp4"));
}

#[test]
fn unreadable_page_reports_error_line() {
    let root = tempdir().unwrap();
    let page = root.path().join("pages/Catalog.tsx");
    fs::create_dir_all(page.parent().unwrap()).unwrap();
    fs::write(&page, [0xffu8, 0xfe, 0x00]).unwrap();

    let output = rewrite(root.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ERROR: Error updating pages/Catalog.tsx: failed to read file:"));
    assert!(!stdout.contains(&page.display().to_string()));
    assert_eq!(fs::read(&page).unwrap(), [0xffu8, 0xfe, 0x00]);
    assert!(root.path().join("pages/Catalog.tsx.backup").exists());
}
