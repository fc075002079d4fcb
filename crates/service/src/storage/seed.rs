//! Notes every fresh store starts with.

use models::NewNote;

const DEFAULT_NOTES: [(&str, &str, u8); 4] = [
    (
        "2023-07-15",
        "The blockchain landscape is evolving faster than anticipated. Our positioning with the MicroChain architecture gives us a unique advantage in the market. The scalability solution we're implementing should address the bottlenecks that have plagued most layer-2 implementations.",
        0,
    ),
    (
        "2023-07-18",
        "Token economics model revision complete. The deflationary mechanism coupled with staking rewards creates the perfect balance for long-term sustainability. The board has approved the final parameters for launch.",
        0,
    ),
    (
        "2023-07-22",
        "Security audit is in progress. Initial feedback is positive. The novel consensus mechanism we've implemented has received particular praise. Looking forward to the public release and seeing the community's reaction.",
        0,
    ),
    (
        "2023-07-23",
        "UPCOMING: Major partnership announcement scheduled post-launch",
        1,
    ),
];

/// Seed notes in the order they receive ids.
pub fn default_notes() -> Vec<NewNote> {
    DEFAULT_NOTES
        .iter()
        .map(|(date, content, highlighted)| NewNote {
            date: (*date).to_string(),
            content: (*content).to_string(),
            is_highlighted: Some(*highlighted),
        })
        .collect()
}
