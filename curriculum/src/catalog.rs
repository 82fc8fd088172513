//! Navigation catalog: units → chapters → topics.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::topic::TopicId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicEntry {
    pub id: TopicId,
    /// Short navigation label.
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    pub id: &'static str,
    pub name: &'static str,
    pub topics: &'static [TopicEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub id: &'static str,
    pub name: &'static str,
    /// Tab label, e.g. `"LIM"`.
    pub short_name: &'static str,
    pub chapters: &'static [Chapter],
}

impl Unit {
    /// Topics of every chapter, in order.
    pub fn topics(&self) -> impl Iterator<Item = &'static TopicEntry> + use<> {
        let chapters = self.chapters;
        chapters.iter().flat_map(|c| c.topics.iter())
    }

    #[must_use]
    pub fn contains(&self, topic: TopicId) -> bool {
        self.topics().any(|t| t.id == topic)
    }
}

const fn entry(id: TopicId, label: &'static str) -> TopicEntry {
    TopicEntry { id, label }
}

pub static UNITS: [Unit; 8] = [
    Unit {
        id: "u1",
        name: "Unit 1 Limits and Continuity",
        short_name: "LIM",
        chapters: &[
            Chapter {
                id: "ch1_1",
                name: "Limit Foundations",
                topics: &[
                    entry(TopicId::LimitDefinition, "ε-δ language"),
                    entry(TopicId::LimitOneSided, "One-sided limits"),
                    entry(TopicId::LimitInfinite, "Infinity and asymptotes"),
                ],
            },
            Chapter {
                id: "ch1_2",
                name: "Computing Limits",
                topics: &[
                    entry(TopicId::SqueezeTheorem, "Squeeze theorem"),
                    entry(TopicId::IvtTheorems, "Intermediate value theorem"),
                    entry(TopicId::InfinitesimalCompare, "Orders of infinitesimals"),
                ],
            },
        ],
    },
    Unit {
        id: "u2",
        name: "Unit 2 Derivatives: the Microscopic World",
        short_name: "DIFF",
        chapters: &[
            Chapter {
                id: "ch2_1",
                name: "Definition and Rules",
                topics: &[
                    entry(TopicId::DerivativeBasic, "Tangents and rates"),
                    entry(TopicId::DerivativeRules, "Product and quotient rules"),
                    entry(TopicId::ChainRule, "Chain rule"),
                ],
            },
            Chapter {
                id: "ch2_2",
                name: "Further Differentiation",
                topics: &[
                    entry(TopicId::ImplicitDiff, "Implicit differentiation"),
                    entry(TopicId::RelatedRates, "Related rates"),
                    entry(TopicId::LinearApprox, "Linear approximation"),
                ],
            },
        ],
    },
    Unit {
        id: "u3",
        name: "Unit 3 Applications of the Derivative",
        short_name: "APP",
        chapters: &[
            Chapter {
                id: "ch3_1",
                name: "The Mean Value Family",
                topics: &[
                    entry(TopicId::MvtLagrange, "Mean value theorem"),
                    entry(TopicId::LhopitalRule, "L'Hôpital's rule"),
                ],
            },
            Chapter {
                id: "ch3_2",
                name: "Shape of a Function",
                topics: &[entry(TopicId::Optimization, "Optimization")],
            },
        ],
    },
    Unit {
        id: "u4",
        name: "Unit 4 Integrals: the Power of Accumulation",
        short_name: "INT",
        chapters: &[
            Chapter {
                id: "ch4_1",
                name: "Defining the Integral",
                topics: &[
                    entry(TopicId::IntegralBasic, "Riemann sums"),
                    entry(TopicId::Ftc, "Fundamental theorem"),
                ],
            },
            Chapter {
                id: "ch4_2",
                name: "Techniques",
                topics: &[entry(TopicId::IntegrationSubstitution, "Substitution (u-sub)")],
            },
        ],
    },
    Unit {
        id: "u5",
        name: "Unit 5 Geometry of the Integral",
        short_name: "GEO",
        chapters: &[Chapter {
            id: "ch5_1",
            name: "Measuring Space",
            topics: &[
                entry(TopicId::AreaBetweenCurves, "Area between curves"),
                entry(TopicId::VolumeRotation, "Volumes of revolution"),
            ],
        }],
    },
    Unit {
        id: "u6",
        name: "Unit 6 Differential Equations",
        short_name: "DE",
        chapters: &[Chapter {
            id: "ch6_1",
            name: "First-Order Equations",
            topics: &[
                entry(TopicId::DeSeparable, "Separation of variables"),
                entry(TopicId::DeLogistic, "Logistic growth"),
            ],
        }],
    },
    Unit {
        id: "u7",
        name: "Unit 7 Series: the Beauty of the Infinite",
        short_name: "SER",
        chapters: &[
            Chapter {
                id: "ch7_1",
                name: "Convergence",
                topics: &[entry(TopicId::SeriesConvergence, "Series and partial sums")],
            },
            Chapter {
                id: "ch7_2",
                name: "Power Series and Expansions",
                topics: &[entry(TopicId::TaylorSeries, "Taylor / Maclaurin series")],
            },
        ],
    },
    Unit {
        id: "u8",
        name: "Unit 8 Multivariable Preview",
        short_name: "MULTI",
        chapters: &[Chapter {
            id: "ch8_1",
            name: "Change in Many Directions",
            topics: &[entry(TopicId::GradientVector, "Gradient field")],
        }],
    },
];

/// The unit containing `topic`. Every topic belongs to exactly one unit.
#[must_use]
pub fn unit_of(topic: TopicId) -> &'static Unit {
    UNITS.iter().find(|u| u.contains(topic)).unwrap_or(&UNITS[0])
}

/// Position of the unit containing `topic`.
#[must_use]
pub fn unit_index_of(topic: TopicId) -> usize {
    UNITS.iter().position(|u| u.contains(topic)).unwrap_or(0)
}

/// Unit by id, e.g. `"u4"`.
#[must_use]
pub fn find_unit(id: &str) -> Option<&'static Unit> {
    UNITS.iter().find(|u| u.id == id)
}

/// Navigation label for `topic`.
#[must_use]
pub fn label_of(topic: TopicId) -> &'static str {
    all_entries().find(|e| e.id == topic).map_or(topic.as_str(), |e| e.label)
}

/// Every catalog entry in navigation order.
pub fn all_entries() -> impl Iterator<Item = &'static TopicEntry> {
    UNITS.iter().flat_map(Unit::topics)
}

/// Every topic in navigation order.
pub fn all_topics() -> impl Iterator<Item = TopicId> {
    all_entries().map(|e| e.id)
}
