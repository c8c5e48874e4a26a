use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

fn version_description(release: &str, latest: &str, ahead: &str) -> String {
    match (release, latest, ahead) {
        (tag, _, _) if !tag.is_empty() => format!("release {tag}"),
        ("", "", _) => "development".to_string(),
        ("", latest, "") => format!("development branch ahead of {latest}"),
        (_, latest, ahead) => format!("development branch {ahead} commits ahead of {latest}"),
    }
}

/// Name, version, commit and build profile of the running binary.
pub fn get_system_info() -> String {
    let profile = if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    };
    let version = version_description(
        option_env!("RELEASE_VERSION").unwrap_or(""),
        option_env!("LATEST_TAG").unwrap_or(""),
        option_env!("COMMITS_AHEAD").unwrap_or(""),
    );

    format!(
        "{} {} - {}\nCommit: {}\n{} build",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        version,
        COMMIT,
        profile
    )
}
