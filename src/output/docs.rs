//! Long-form documentation for the `docs` subcommand

use colored::Colorize;

struct Entry {
    name: &'static str,
    lines: &'static [&'static str],
}

const STANDARD: &[Entry] = &[
    Entry {
        name: "Trash",
        lines: &["Empties ~/.Trash", "Can free: 0-5GB"],
    },
    Entry {
        name: "Homebrew Cache",
        lines: &[
            "Removes downloaded packages and old versions",
            "Safe to delete - can be re-downloaded",
        ],
    },
    Entry {
        name: "Application Caches",
        lines: &[
            "Safari, Chrome, VSCode, pip, yarn caches",
            "Safe to delete - applications will rebuild",
        ],
    },
    Entry {
        name: "npm & Yarn Caches",
        lines: &["Safe to delete - packages re-download on install"],
    },
    Entry {
        name: "Old Logs",
        lines: &["Removes .log files older than 30 days"],
    },
    Entry {
        name: "Xcode DerivedData",
        lines: &[
            "Build artifacts and indexes, Xcode will rebuild",
            "Requires confirmation",
        ],
    },
    Entry {
        name: "Large File Finder",
        lines: &["Lists files over 1GB in Downloads and Documents", "Never deletes"],
    },
];

const DEEP: &[Entry] = &[
    Entry {
        name: "node_modules Folders",
        lines: &[
            "Removes node_modules up to 4 levels below your home directory",
            "Shows the list before deletion",
            "Run 'npm install' to restore in projects",
        ],
    },
    Entry {
        name: "Docker Images & Containers",
        lines: &["Runs docker system prune -af", "May remove images you need"],
    },
    Entry {
        name: "CocoaPods Cache",
        lines: &["Removes cached iOS dependencies"],
    },
    Entry {
        name: "Gradle Cache",
        lines: &["Removes Android build caches"],
    },
    Entry {
        name: "Xcode Archives",
        lines: &[
            "Contains app builds for distribution",
            "CANNOT be recovered once deleted",
        ],
    },
];

const PRACTICES: &[&str] = &[
    "Always run with --dry-run first",
    "Start with standard cleanup",
    "Only use deep cleanup when desperate for space",
    "Use --report <FILE> to keep a record of what was freed",
];

fn push_entries(out: &mut String, entries: &[Entry], paint: fn(&str) -> colored::ColoredString) {
    for entry in entries {
        out.push_str(&format!("\n{}\n", paint(entry.name)));
        for line in entry.lines {
            out.push_str(&format!("  • {}\n", line));
        }
    }
}

pub fn render_docs() -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "WHAT IS CLEAN-DISK-SPACE?".bold()));
    out.push_str("A safe, interactive CLI to reclaim disk space on a developer machine.\n");
    out.push_str("Destructive operations always ask first unless --yes is given.\n");

    out.push_str(&format!("\n{}\n", "STANDARD CLEANUP (SAFE):".bold()));
    push_entries(&mut out, STANDARD, |s| s.green());

    out.push_str(&format!("\n{}\n", "DEEP CLEANUP (REQUIRES CONFIRMATION):".bold()));
    push_entries(&mut out, DEEP, |s| s.red());

    out.push_str(&format!("\n{}\n", "BEST PRACTICES:".bold()));
    for (i, practice) in PRACTICES.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, practice));
    }

    out.push_str(&format!(
        "\n{}\n",
        "Run 'clean-disk-space help' to see usage examples".dimmed()
    ));
    out
}
