use folio_core::{
    collect_tags, filter_projects, filter_with_outcome, DateRange, Project, ProjectFilter,
    ProjectFrontmatter, ProjectLinks, ProjectStatus, ProjectType, Role,
};
use pretty_assertions::assert_eq;

fn project(
    slug: &str,
    kind: ProjectType,
    roles: &[Role],
    tags: &[&str],
    stack: &[&str],
    description: &str,
) -> Project {
    Project::new(
        ProjectFrontmatter {
            title: format!("{slug} project"),
            slug: slug.to_string(),
            kind,
            roles: roles.to_vec(),
            status: ProjectStatus::Live,
            featured: false,
            stack: stack.iter().map(|value| value.to_string()).collect(),
            highlights: Vec::new(),
            links: ProjectLinks::default(),
            dates: DateRange::new("2020", "2021"),
            metrics: None,
            screens: None,
            tags: tags.iter().map(|value| value.to_string()).collect(),
            description: description.to_string(),
        },
        "",
    )
}

fn sample() -> Vec<Project> {
    vec![
        project(
            "atlas",
            ProjectType::Data,
            &[Role::Data, Role::Backend],
            &["ETL", "Python"],
            &["Airflow", "Postgres"],
            "Batch ingestion pipeline",
        ),
        project(
            "beacon",
            ProjectType::Web,
            &[Role::Frontend],
            &["React"],
            &["TypeScript", "Next.js"],
            "Marketing site",
        ),
        project(
            "cortex",
            ProjectType::Ml,
            &[Role::Ml, Role::Infra],
            &["PyTorch", "python"],
            &["CUDA"],
            "Model serving with low latency",
        ),
        project(
            "ember",
            ProjectType::Web,
            &[Role::Frontend, Role::Backend],
            &["react", "rust"],
            &["Axum"],
            "Realtime dashboard",
        ),
    ]
}

fn slugs(projects: &[&Project]) -> Vec<String> {
    projects
        .iter()
        .map(|project| project.slug().to_string())
        .collect()
}

#[test]
fn empty_filter_returns_input_unchanged() {
    let projects = sample();
    let shown = filter_projects(&projects, &ProjectFilter::new());
    assert_eq!(slugs(&shown), vec!["atlas", "beacon", "cortex", "ember"]);
}

#[test]
fn search_matches_title_description_tags_and_stack_case_insensitively() {
    let projects = sample();

    let by_title = ProjectFilter::new().with_search("BEACON");
    assert_eq!(slugs(&filter_projects(&projects, &by_title)), vec!["beacon"]);

    let by_description = ProjectFilter::new().with_search("latency");
    assert_eq!(
        slugs(&filter_projects(&projects, &by_description)),
        vec!["cortex"]
    );

    let by_tag_substring = ProjectFilter::new().with_search("pyth");
    assert_eq!(
        slugs(&filter_projects(&projects, &by_tag_substring)),
        vec!["atlas", "cortex"]
    );

    let by_stack = ProjectFilter::new().with_search("axum");
    assert_eq!(slugs(&filter_projects(&projects, &by_stack)), vec!["ember"]);
}

#[test]
fn type_and_role_are_exact_matches() {
    let projects = sample();

    let web = ProjectFilter::new().with_kind(ProjectType::Web);
    assert_eq!(
        slugs(&filter_projects(&projects, &web)),
        vec!["beacon", "ember"]
    );

    let backend = ProjectFilter::new().with_role(Role::Backend);
    assert_eq!(
        slugs(&filter_projects(&projects, &backend)),
        vec!["atlas", "ember"]
    );
}

#[test]
fn tags_require_every_selected_tag() {
    let projects = sample();

    let python = ProjectFilter::new().with_tag("PYTHON");
    assert_eq!(
        slugs(&filter_projects(&projects, &python)),
        vec!["atlas", "cortex"]
    );

    let python_and_etl = python.clone().with_tag("etl");
    assert_eq!(
        slugs(&filter_projects(&projects, &python_and_etl)),
        vec!["atlas"]
    );

    let no_match = ProjectFilter::new().with_tag("react").with_tag("etl");
    assert!(filter_projects(&projects, &no_match).is_empty());
}

#[test]
fn combined_criteria_equal_intersection_of_single_criteria() {
    let projects = sample();
    let singles = [
        ProjectFilter::new().with_search("re"),
        ProjectFilter::new().with_kind(ProjectType::Web),
        ProjectFilter::new().with_role(Role::Backend),
        ProjectFilter::new().with_tag("react"),
    ];

    for (i, left) in singles.iter().enumerate() {
        for right in singles.iter().skip(i + 1) {
            let combined = ProjectFilter {
                search: format!("{}{}", left.search, right.search),
                kind: left.kind.or(right.kind),
                role: left.role.or(right.role),
                tags: left.tags.iter().chain(&right.tags).cloned().collect(),
            };
            let left_hits = slugs(&filter_projects(&projects, left));
            let right_hits = slugs(&filter_projects(&projects, right));
            let expected: Vec<String> = left_hits
                .into_iter()
                .filter(|slug| right_hits.contains(slug))
                .collect();
            assert_eq!(slugs(&filter_projects(&projects, &combined)), expected);
        }
    }
}

#[test]
fn result_is_always_an_ordered_subset_of_input() {
    let projects = sample();
    let filters = [
        ProjectFilter::new().with_search("a"),
        ProjectFilter::new().with_kind(ProjectType::Research),
        ProjectFilter::new()
            .with_role(Role::Frontend)
            .with_tag("react"),
    ];

    for filter in &filters {
        let shown = filter_projects(&projects, filter);
        let mut cursor = 0;
        for project in shown {
            let position = projects[cursor..]
                .iter()
                .position(|candidate| candidate == project)
                .expect("every hit must come from the input in order");
            cursor += position + 1;
        }
    }
}

#[test]
fn outcome_reports_shown_and_total() {
    let projects = sample();
    let filter = ProjectFilter::new().with_kind(ProjectType::Web);
    let (shown, outcome) = filter_with_outcome(&projects, &filter);

    assert_eq!(shown.len(), 2);
    assert_eq!(outcome.shown, 2);
    assert_eq!(outcome.total, 4);
    assert_eq!(outcome.summary(), "Showing 2 of 4 projects");
}

fn titled(slug: &str, title: &str) -> Project {
    let mut project = project(slug, ProjectType::Web, &[], &[], &[], "");
    project.meta.title = title.to_string();
    project
}

#[test]
fn search_text_keeps_surrounding_whitespace() {
    let projects = vec![
        titled("go-tools", "Go tools"),
        titled("google-clone", "Google clone"),
        titled("solo", "Solo"),
    ];

    let trailing_space = ProjectFilter::new().with_search("go ");
    assert_eq!(
        slugs(&filter_projects(&projects, &trailing_space)),
        vec!["go-tools"]
    );

    let only_space = ProjectFilter::new().with_search(" ");
    assert_eq!(
        slugs(&filter_projects(&projects, &only_space)),
        vec!["go-tools", "google-clone"]
    );
}

#[test]
fn authored_tag_with_padding_matches_its_vocabulary_entry() {
    let projects = vec![
        project("padded", ProjectType::Web, &[], &[" React"], &[], ""),
        project("plain", ProjectType::Web, &[], &["react"], &[], ""),
    ];

    let vocabulary = collect_tags(&projects);
    assert_eq!(vocabulary, vec![" react", "react"]);

    for (tag, expected) in vocabulary.iter().zip(["padded", "plain"]) {
        let filter = ProjectFilter::new().with_tag(tag.as_str());
        assert_eq!(slugs(&filter_projects(&projects, &filter)), vec![expected]);
    }
}
