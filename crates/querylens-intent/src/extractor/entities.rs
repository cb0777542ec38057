use querylens_core::ExtractedEntities;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Suffixes that mark a capitalized identifier as a class-like entity
const CLASS_SUFFIXES: &[&str] = &[
    "Service",
    "Controller",
    "Repository",
    "Manager",
    "Handler",
    "Factory",
    "Builder",
    "Provider",
    "Validator",
    "Adapter",
    "Strategy",
    "Processor",
    "Listener",
    "Helper",
    "Utils",
    "Util",
    "Configuration",
    "Config",
    "Client",
    "Server",
    "Entity",
    "Model",
    "DTO",
    "Dto",
    "DAO",
    "Dao",
    "Impl",
    "Exception",
    "Error",
    "Interface",
    "Component",
    "Module",
    "Filter",
    "Interceptor",
    "Mapper",
    "Converter",
    "Resolver",
    "Executor",
    "Scheduler",
    "Parser",
    "Engine",
    "Gateway",
    "Middleware",
    "Proxy",
    "Wrapper",
    "Registry",
];

static CLASS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b[A-Z][A-Za-z0-9]*(?:{})\b", CLASS_SUFFIXES.join("|"));
    match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Class regex is invalid: {err}"),
    }
});

static METHOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\b([a-z][A-Za-z0-9]*)\(\)") {
        Ok(regex) => regex,
        Err(err) => panic!("Method regex is invalid: {err}"),
    });

static PACKAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(r"\b[a-z][a-z0-9_]*(?:\.[a-z][a-z0-9_]*)+\b") {
            Ok(regex) => regex,
            Err(err) => panic!("Package regex is invalid: {err}"),
        },
    );

/// Run the three entity matchers against the raw, case-preserving query.
pub fn extract(query: &str) -> ExtractedEntities {
    let classes = unique(CLASS_REGEX.find_iter(query).map(|found| found.as_str()));
    let methods = unique(
        METHOD_REGEX
            .captures_iter(query)
            .filter_map(|captures| captures.get(1))
            .map(|found| found.as_str()),
    );
    let packages = unique(PACKAGE_REGEX.find_iter(query).map(|found| found.as_str()));

    ExtractedEntities::new(classes, methods, packages)
}

/// Keep the first occurrence of every match.
fn unique<'query>(matches: impl Iterator<Item = &'query str>) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .filter(|found| seen.insert(*found))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_suffixes() {
        let entities = extract("Does UserService call OrderRepository or the PaymentDTO?");
        assert_eq!(
            entities.classes,
            vec!["UserService", "OrderRepository", "PaymentDTO"]
        );
    }

    #[test]
    fn test_bare_suffix_is_not_a_class() {
        let entities = extract("Which Service handles this?");
        assert!(entities.classes.is_empty());
    }

    #[test]
    fn test_lowercase_or_unsuffixed_words_are_not_classes() {
        let entities = extract("the userService and the Order are unrelated");
        assert!(entities.classes.is_empty());
    }

    #[test]
    fn test_classes_are_deduplicated_in_order() {
        let entities = extract("OrderService calls UserService, then OrderService again");
        assert_eq!(entities.classes, vec!["OrderService", "UserService"]);
    }

    #[test]
    fn test_method_calls() {
        let entities = extract("Why does findById() return null when save() runs first? findById()");
        assert_eq!(entities.methods, vec!["findById", "save"]);
    }

    #[test]
    fn test_method_requires_empty_parens() {
        let entities = extract("what does findById(id) do");
        assert!(entities.methods.is_empty());
    }

    #[test]
    fn test_packages() {
        let entities = extract("Where is com.example.orders used? Also org.acme and com.example.orders");
        assert_eq!(entities.packages, vec!["com.example.orders", "org.acme"]);
    }

    #[test]
    fn test_single_segment_is_not_a_package() {
        let entities = extract("the orders module");
        assert!(entities.packages.is_empty());
    }

    #[test]
    fn test_counts_are_consistent() {
        let entities = extract("Compare UserService.findAll() with com.acme.users");
        assert_eq!(entities.classes, vec!["UserService"]);
        assert_eq!(entities.methods, vec!["findAll"]);
        assert_eq!(entities.packages, vec!["com.acme.users"]);
        assert_eq!(entities.counts.total, 3);
        assert!(entities.counts_consistent());
    }
}
