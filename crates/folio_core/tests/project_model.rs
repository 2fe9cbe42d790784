use folio_core::{
    parse_project, render_body_html, BadgeTone, MetricValue, ProjectCard, ProjectStatus,
    ProjectType, Role,
};

const FULL_SOURCE: &str = r#"---
title: Cortex
slug: cortex
type: ml
roles: [ml, infra]
status: demo
featured: true
stack: [Python, PyTorch, CUDA, Triton, Kubernetes, Redis]
highlights:
  - Cut p99 latency in half
  - Served 3 model families
  - Zero-downtime rollouts
links:
  github: https://github.com/example/cortex
  paper: https://example.com/paper.pdf
dates:
  start: 2022-03
  end: present
metrics:
  users: 1200
  latency: 40ms
  accuracy: "94%"
screens:
  gallery: [one.png, two.png]
tags: [ML, Serving]
description: Low-latency model serving platform.
---
## Overview

![architecture](images/arch.png)
**Result**
- Faster inference
"#;

#[test]
fn full_front_matter_decodes_every_field() {
    let project = parse_project("cortex", FULL_SOURCE).unwrap();
    let meta = &project.meta;

    assert_eq!(meta.kind, ProjectType::Ml);
    assert_eq!(meta.roles, vec![Role::Ml, Role::Infra]);
    assert_eq!(meta.status, ProjectStatus::Demo);
    assert!(meta.featured);
    assert_eq!(meta.highlights.len(), 3);
    assert_eq!(
        meta.links.github.as_deref(),
        Some("https://github.com/example/cortex")
    );
    assert_eq!(meta.links.live, None);
    assert_eq!(meta.dates.end, "present");

    let metrics = meta.metrics.as_ref().unwrap();
    assert_eq!(metrics.users, Some(MetricValue::Integer(1200)));
    assert_eq!(metrics.accuracy.as_deref(), Some("94%"));
    assert_eq!(metrics.revenue, None);
    assert!(!metrics.is_empty());

    let screens = meta.screens.as_ref().unwrap();
    assert_eq!(screens.hero, None);
    assert_eq!(screens.gallery, vec!["one.png", "two.png"]);
}

#[test]
fn textual_metric_values_are_kept() {
    let source = "---\ntitle: T\ntype: web\nstatus: live\ndates: {start: a, end: b}\nmetrics:\n  users: 10k+\n---\n";
    let project = parse_project("t", source).unwrap();
    let users = project.meta.metrics.unwrap().users.unwrap();
    assert_eq!(users, MetricValue::Text("10k+".to_string()));
    assert_eq!(users.to_string(), "10k+");
}

#[test]
fn unknown_enum_value_is_rejected() {
    let source = "---\ntitle: T\ntype: mobile\nstatus: live\ndates: {start: a, end: b}\n---\n";
    assert!(parse_project("t", source).is_err());
}

#[test]
fn project_serialization_uses_authored_field_names() {
    let project = parse_project("cortex", FULL_SOURCE).unwrap();
    let json = serde_json::to_value(&project).unwrap();

    assert_eq!(json["type"], "ml");
    assert_eq!(json["status"], "demo");
    assert_eq!(json["roles"][1], "infra");
    assert_eq!(json["dates"]["start"], "2022-03");
    assert_eq!(json["metrics"]["users"], 1200);
    assert!(json["links"].get("live").is_none());
    assert!(json["content"].as_str().unwrap().starts_with("## Overview"));
}

#[test]
fn card_projection_limits_lists_and_uses_hero_image_only() {
    let project = parse_project("cortex", FULL_SOURCE).unwrap();
    let card = ProjectCard::from_project(&project);

    assert_eq!(card.href, "/projects/cortex");
    assert_eq!(card.type_label, "ML/AI");
    assert_eq!(card.status_tone, BadgeTone::Accent);
    assert_eq!(card.highlights.len(), 2);
    assert_eq!(card.stack, vec!["Python", "PyTorch", "CUDA", "Triton"]);
    assert_eq!(card.stack_overflow, 2);
    assert_eq!(card.cover_image, None);
    assert_eq!(card.date_label, "2022-03 \u{2014} present");

    let with_hero = FULL_SOURCE.replace("screens:\n", "screens:\n  hero: images/hero.png\n");
    let project = parse_project("cortex", &with_hero).unwrap();
    let card = ProjectCard::from_project(&project);
    assert_eq!(card.cover_image.as_deref(), Some("images/hero.png"));
}

#[test]
fn body_renders_for_detail_page() {
    let project = parse_project("cortex", FULL_SOURCE).unwrap();
    let html = render_body_html(&project.content);

    assert!(html.starts_with("<h2>Overview</h2>"));
    assert!(html.contains("<p class=\"strong\">Result</p>"));
    assert!(html.ends_with("<li>Faster inference</li>"));
}
