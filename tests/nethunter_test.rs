//! Integration tests for the NetHunter kernel reports

mod common;

use common::{stderr, stdout, TestProject, SAMPLE_KERNELS};

const ANDROID_VERSIONS: [&str; 8] = [
    "kitkat",
    "lollipop",
    "marshmallow",
    "nougat",
    "oreo",
    "pie",
    "ten",
    "eleven",
];

#[test]
fn test_nethunter_kernels_table() {
    let project = TestProject::new();
    project.create_file("kernels.yml", SAMPLE_KERNELS);

    let output = project.run(&["nethunter-kernels"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let content = project.read_file("md/kernels.md");
    assert!(content.starts_with("---\ntitle: Official Kali NetHunter Kernels\n---\n\n"));
    assert!(content.contains("[**1** kernels](nethunter-kernelstats.html)"));
    assert!(content.contains(
        "| OnePlus 7 | oneplus7-oos-ten | ten | 4.14 |  | OxygenOS 10 | HID, Wi-Fi injection | Re4son | `git clone https://github.com/Re4son/android_kernel_oneplus_sm8150` |"
    ));

    let out = stdout(&output);
    assert!(out.contains("✓ File: md/kernels.md successfully written"));
    assert!(out.contains("Kernels: 1"));
}

#[test]
fn test_nethunter_kernels_missing_catalog() {
    let project = TestProject::new();
    let output = project.run(&["nethunter-kernels"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("kernels.yml"));
}

#[test]
fn test_nethunter_kernel_stats_counts_directories() {
    let project = TestProject::new();
    for version in ANDROID_VERSIONS {
        project.create_dir(version);
    }
    project.create_dir("pie/oneplus7");
    project.create_dir("pie/pixel3");
    project.create_dir("ten/oneplus7");
    // Plain files are not kernel trees
    project.create_file("ten/README", "notes");

    let output = project.run(&["nethunter-kernel-stats"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let content = project.read_file("md/kernel-stats.md");
    assert!(content.contains("a total of [**3** kernels](nethunter-kernels.html)"));
    assert!(content.contains("| Kitkat | 0 |\n"));
    assert!(content.contains("| Pie | 2 |\n| Ten | 1 |\n| Eleven | 0 |\n"));
    assert!(stdout(&output).contains("Kernels: 3"));
}

#[test]
fn test_nethunter_kernel_stats_missing_version_dir() {
    let project = TestProject::new();
    project.create_dir("kitkat");

    let output = project.run(&["nethunter-kernel-stats"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("lollipop"));
    assert!(!project.file_exists("md/kernel-stats.md"));
}
