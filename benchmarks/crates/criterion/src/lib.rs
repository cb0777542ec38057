//! Shared query corpus for the criterion benchmarks.

/// Queries of increasing size, keyed by a short label.
pub const QUERY_CASES: &[(&str, &str)] = &[
    ("entity", "What is the UserService class?"),
    ("debug", "Why does OrderProcessor throw a NullPointerException?"),
    ("compare", "Compare OrderService and PaymentService"),
    (
        "flow",
        "How does the request flow from OrderController through validate() to OrderRepository?",
    ),
    (
        "architecture",
        "Explain the architecture. Which components depend on the EventRegistry? \
         How do com.shop.orders and com.shop.billing talk to each other? \
         Why is the PaymentGateway designed as a separate module, and where is the bottleneck \
         when the CacheManager is cold?",
    ),
];
