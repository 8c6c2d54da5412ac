//! Static skill lexicon: canonical terms and their surface-variant aliases.
//!
//! Three disjoint categories of canonical terms (development stack,
//! cloud/DevOps, soft skills; a mix of pt-BR and English, matching the job
//! markets the sources cover) plus a flat alias table mapping abbreviations
//! and spelling variants to their canonical form.
//!
//! The alias table is strictly one-hop: every alias target is itself a
//! canonical term, so resolution can never chain or cycle and resolving an
//! already-canonical term returns it unchanged.
//!
//! Everything here is built once at process start via `Lazy` and never
//! mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// One of the three skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Dev,
    Cloud,
    Soft,
}

impl Category {
    /// All categories, in reporting order.
    pub const ALL: [Category; 3] = [Category::Dev, Category::Cloud, Category::Soft];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dev => "dev",
            Category::Cloud => "cloud",
            Category::Soft => "soft",
        }
    }
}

const DEV_STACK: &[&str] = &[
    // frontend core
    "javascript", "typescript", "react", "vue", "angular", "svelte", "next", "nuxt",
    "html", "css", "sass", "scss", "tailwind", "bootstrap", "material ui", "redux",
    "jest", "vitest", "cypress", "playwright", "webpack", "vite", "babel",
    "node", "express", "nestjs", "graphql", "rest", "rxjs", "storybook", "eslint", "prettier",
    "primeng", "ant design", "chakra ui", "vuetify", "quasar", "shadcn", "acessibilidade",
    "emotion", "framer motion", "three.js", "d3.js", "webgl", "wcag", "accessibility",
    "webassembly", "wasm", "pwa", "estrutura de dados", "algoritmos",
    // backend
    "python", "java", "c#", "php", "ruby", "go", "rust", "kotlin", "swift",
    "django", "flask", "fastapi", "spring", "laravel", "rails", "gin", "fiber",
    "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "oracle",
    // mobile
    "react native", "flutter", "ionic", "xamarin", "android", "ios",
    // common extras in descriptions
    "redux toolkit", "rtk", "zustand", "mobx", "less", "styled-components",
    "git", "github", "gitlab", "bitbucket", "jira", "confluence", "slack",
    "api", "rest api", "graphql api",
    "junit", "pytest", "mocha", "chai", "testing", "tdd", "bdd",
    "sql", "nosql", "orm", "hibernate", "sequelize", "prisma",
    "maven", "gradle", "npm", "yarn", "pip", "composer",
];

const CLOUD: &[&str] = &[
    "aws", "azure", "gcp", "google cloud", "cloudfront", "s3", "lambda", "ec2",
    "cloud run", "firebase",
    "docker", "kubernetes", "helm", "terraform", "serverless", "cloudflare",
    "vercel", "netlify",
    "jenkins", "github actions", "gitlab ci", "ci/cd", "ansible", "vagrant",
    "nginx", "apache", "load balancer", "cdn", "vpc", "iam", "rds", "dynamodb",
    "monitoring", "logging", "prometheus", "grafana", "elk stack", "datadog",
    "microservices", "microserviços", "containers", "orchestration", "scaling",
    "auto scaling",
    "openshift", "istio", "linkerd", "consul", "traefik", "packer", "pulumi",
    "argo cd", "fluxcd",
    "cloudwatch", "new relic", "appdynamics", "sentry", "elastic apm", "jaeger",
    "zipkin",
    "service mesh", "observability", "otel", "open telemetry",
];

const SOFT_SKILLS: &[&str] = &[
    // pt-br
    "comunicação", "trabalho em equipe", "colaboração", "organização",
    "resolução de problemas", "pensamento crítico", "proatividade", "adaptabilidade",
    "liderança", "gestão de tempo", "empatia", "curiosidade", "criatividade",
    "autonomia", "responsabilidade", "comprometimento", "flexibilidade",
    "aprendizado contínuo", "mentoria", "feedback", "inglês", "inglês avançado",
    "scrum", "metodologias ágeis", "kanban", "lean", "design thinking",
    "negociação", "documentação", "code review", "pair programming", "resiliência",
    "orientação a resultados", "tomada de decisão", "mentorship",
    // en
    "communication", "teamwork", "collaboration", "organization", "problem solving",
    "critical thinking", "proactivity", "adaptability", "leadership", "time management",
    "ownership", "self-learning", "attention to detail", "empathy", "creativity",
    "autonomy", "responsibility", "commitment", "flexibility", "continuous learning",
    "mentoring", "english", "advanced english", "agile methodologies",
];

const ALIAS_PAIRS: &[(&str, &str)] = &[
    // abbreviations
    ("js", "javascript"),
    ("ts", "typescript"),
    // library variants
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vue.js", "vue"),
    ("vuejs", "vue"),
    ("angular.js", "angular"),
    ("angularjs", "angular"),
    ("mui", "material ui"),
    ("reduxjs", "redux"),
    ("node.js", "node"),
    ("nodejs", "node"),
    // backend
    ("c sharp", "c#"),
    ("csharp", "c#"),
    ("dotnet", "c#"),
    (".net", "c#"),
    ("springboot", "spring"),
    ("spring-boot", "spring"),
    ("nestjs.js", "nestjs"),
    ("nest.js", "nestjs"),
    ("fast api", "fastapi"),
    ("golang", "go"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    // devops
    ("docker-compose", "docker"),
    ("k8s", "kubernetes"),
    ("tf", "terraform"),
    ("github-actions", "github actions"),
    ("gitlab-ci", "gitlab ci"),
    // databases
    ("postgres sql", "postgresql"),
    ("pg", "postgresql"),
    ("mongo db", "mongodb"),
    ("elastic", "elasticsearch"),
    // en/pt equivalents
    ("team work", "teamwork"),
    ("problem-solving", "problem solving"),
    ("lead", "leadership"),
    ("autonomous", "autonomy"),
    ("committed", "commitment"),
    ("flexible", "flexibility"),
    ("agile", "agile methodologies"),
    ("ágil", "metodologias ágeis"),
];

static DEV_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DEV_STACK.iter().copied().collect());
static CLOUD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CLOUD.iter().copied().collect());
static SOFT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SOFT_SKILLS.iter().copied().collect());

static ALIASES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIAS_PAIRS.iter().copied().collect());

/// Canonical terms the tokenizer cannot reconstruct (multi-word phrases and
/// terms containing separators like `-` or `/`), paired with their category.
/// The classifier matches these by literal scan over the lowered text.
static PHRASES: Lazy<Vec<(&'static str, Category)>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .flat_map(|&category| set(category).iter().map(move |&term| (term, category)))
        .filter(|(term, _)| needs_phrase_match(term))
        .collect()
});

fn needs_phrase_match(term: &str) -> bool {
    term.chars()
        .any(|c| !(c.is_alphanumeric() || c == '_' || c == '+' || c == '#' || c == '.'))
}

/// The canonical term set for one category.
pub fn set(category: Category) -> &'static HashSet<&'static str> {
    match category {
        Category::Dev => &DEV_SET,
        Category::Cloud => &CLOUD_SET,
        Category::Soft => &SOFT_SET,
    }
}

/// Resolve a lowered surface token to its canonical form.
///
/// One-hop lookup: unknown and already-canonical tokens come back unchanged.
pub fn resolve_alias(token: &str) -> &str {
    ALIASES.get(token).copied().unwrap_or(token)
}

/// Canonical terms that require literal-phrase matching, with categories.
pub fn phrases() -> &'static [(&'static str, Category)] {
    &PHRASES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_disjoint() {
        for term in DEV_SET.iter() {
            assert!(!CLOUD_SET.contains(term), "'{term}' in both dev and cloud");
            assert!(!SOFT_SET.contains(term), "'{term}' in both dev and soft");
        }
        for term in CLOUD_SET.iter() {
            assert!(!SOFT_SET.contains(term), "'{term}' in both cloud and soft");
        }
    }

    #[test]
    fn test_alias_targets_are_canonical() {
        for (alias, target) in ALIAS_PAIRS {
            let canonical = DEV_SET.contains(target)
                || CLOUD_SET.contains(target)
                || SOFT_SET.contains(target);
            assert!(canonical, "alias '{alias}' points at non-canonical '{target}'");
        }
    }

    #[test]
    fn test_alias_resolution_is_one_hop() {
        // No alias source may itself be canonical, otherwise resolving a
        // canonical term would not be idempotent.
        for (alias, _) in ALIAS_PAIRS {
            let canonical = DEV_SET.contains(alias)
                || CLOUD_SET.contains(alias)
                || SOFT_SET.contains(alias);
            assert!(!canonical, "alias source '{alias}' is also canonical");
        }
    }

    #[test]
    fn test_resolve_alias_is_idempotent_on_canonicals() {
        for category in Category::ALL {
            for term in set(category) {
                assert_eq!(resolve_alias(term), *term);
            }
        }
    }

    #[test]
    fn test_resolve_known_aliases() {
        assert_eq!(resolve_alias("k8s"), "kubernetes");
        assert_eq!(resolve_alias("nodejs"), "node");
        assert_eq!(resolve_alias("mui"), "material ui");
        assert_eq!(resolve_alias("ágil"), "metodologias ágeis");
        assert_eq!(resolve_alias("unmapped"), "unmapped");
    }

    #[test]
    fn test_phrase_list_contents() {
        let phrase_terms: Vec<&str> = phrases().iter().map(|(t, _)| *t).collect();
        assert!(phrase_terms.contains(&"material ui"));
        assert!(phrase_terms.contains(&"ci/cd"));
        assert!(phrase_terms.contains(&"styled-components"));
        assert!(phrase_terms.contains(&"trabalho em equipe"));
        // single tokens survive the tokenizer and never need phrase scans
        assert!(!phrase_terms.contains(&"react"));
        assert!(!phrase_terms.contains(&"node.js"));
        assert!(!phrase_terms.contains(&"c#"));
    }

    #[test]
    fn test_phrase_categories() {
        for (term, category) in phrases() {
            assert!(set(*category).contains(term));
        }
    }
}
