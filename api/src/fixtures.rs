use serde::Deserialize;

use pavilion_db::matches::Match;
use pavilion_db::MatchResult;

pub const PAGE_SIZE: usize = 12;

/// Match outcome filter. `Upcoming` selects matches that have not been
/// played yet, i.e. whose result is still "will be played".
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    #[default]
    All,
    Win,
    Loss,
    Draw,
    Upcoming,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TeamFilter {
    #[default]
    All,
    Team(String),
}

/// Paged, filterable view over the full match list.
///
/// The list of team names is computed once from the full data set, so the
/// team dropdown stays stable no matter which filters are active.
pub struct Fixtures {
    all_matches: Vec<Match>,
    teams: Vec<String>,
    result_filter: ResultFilter,
    team_filter: TeamFilter,
    current_page: usize,
}

fn team_names(matches: &[Match]) -> Vec<String> {
    let mut teams = matches
        .iter()
        .flat_map(|m| [m.team1.clone(), m.team2.clone()])
        .collect::<Vec<_>>();
    teams.sort();
    teams.dedup();
    teams
}

impl Fixtures {
    pub fn new(matches: Vec<Match>) -> Fixtures {
        let teams = team_names(&matches);
        Fixtures {
            all_matches: matches,
            teams,
            result_filter: ResultFilter::All,
            team_filter: TeamFilter::All,
            current_page: 1,
        }
    }

    /// Swap in a new data set, recomputing the team list and returning to
    /// the first page.
    pub fn replace_matches(&mut self, matches: Vec<Match>) {
        self.teams = team_names(&matches);
        self.all_matches = matches;
        self.current_page = 1;
    }

    pub fn set_result_filter(&mut self, filter: ResultFilter) {
        self.result_filter = filter;
        self.current_page = 1;
    }

    pub fn set_team_filter(&mut self, filter: TeamFilter) {
        self.team_filter = filter;
        self.current_page = 1;
    }

    /// Jump straight to a page. The page number is taken as-is; out-of-range
    /// values simply yield an empty visible page.
    pub fn paginate(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages for the current filtered list. An empty list has
    /// zero pages.
    pub fn total_pages(&self) -> usize {
        (self.filtered().len() + PAGE_SIZE - 1) / PAGE_SIZE
    }

    /// Every team name appearing in the full data set, sorted and deduplicated.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// The matches passing both filters, in their original order.
    pub fn filtered(&self) -> Vec<&Match> {
        self.all_matches
            .iter()
            .filter(|m| match self.result_filter {
                ResultFilter::All => true,
                ResultFilter::Win => m.result == MatchResult::Win,
                ResultFilter::Loss => m.result == MatchResult::Loss,
                ResultFilter::Draw => m.result == MatchResult::Draw,
                ResultFilter::Upcoming => m.result == MatchResult::WillBePlayed,
            })
            .filter(|m| match &self.team_filter {
                TeamFilter::All => true,
                TeamFilter::Team(name) => &m.team1 == name || &m.team2 == name,
            })
            .collect()
    }

    /// The slice of the filtered list shown on the current page.
    pub fn visible_page(&self) -> Vec<&Match> {
        self.filtered()
            .into_iter()
            .skip(self.current_page.saturating_sub(1).saturating_mul(PAGE_SIZE))
            .take(PAGE_SIZE)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pavilion_db::object_id::MatchId;

    use super::*;

    fn fixture(n: usize, team1: &str, team2: &str, result: MatchResult) -> Match {
        Match {
            id: MatchId::new(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(n as u64))
                .unwrap(),
            time: "14:00".to_string(),
            venue: "Village Green".to_string(),
            match_type: "League".to_string(),
            result,
            division: "Division 2".to_string(),
            url: None,
            image_url: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn sample(total: usize, wins: usize) -> Vec<Match> {
        (0..total)
            .map(|n| {
                let result = if n < wins {
                    MatchResult::Win
                } else {
                    MatchResult::Loss
                };
                fixture(n, "Rovers", "Wanderers", result)
            })
            .collect()
    }

    #[test]
    fn result_filter_single_page() {
        let mut fixtures = Fixtures::new(sample(14, 5));
        fixtures.set_result_filter(ResultFilter::Win);

        assert_eq!(fixtures.filtered().len(), 5);
        assert_eq!(fixtures.visible_page().len(), 5);
        assert_eq!(fixtures.total_pages(), 1);
        assert!(fixtures
            .filtered()
            .iter()
            .all(|m| m.result == MatchResult::Win));
    }

    #[test]
    fn pagination_splits_pages() {
        let mut fixtures = Fixtures::new(sample(25, 0));
        assert_eq!(fixtures.total_pages(), 3);
        assert_eq!(fixtures.visible_page().len(), 12);

        fixtures.paginate(2);
        assert_eq!(fixtures.visible_page().len(), 12);

        fixtures.paginate(3);
        assert_eq!(fixtures.visible_page().len(), 1);

        // Walking every page in order reconstructs the filtered list.
        let all_ids = fixtures.filtered().iter().map(|m| m.id).collect::<Vec<_>>();
        let mut paged_ids = Vec::new();
        for page in 1..=fixtures.total_pages() {
            fixtures.paginate(page);
            assert!(fixtures.visible_page().len() <= PAGE_SIZE);
            paged_ids.extend(fixtures.visible_page().iter().map(|m| m.id));
        }
        assert_eq!(paged_ids, all_ids);
    }

    #[test]
    fn upcoming_selects_unplayed_matches() {
        let mut matches = sample(4, 2);
        matches.push(fixture(5, "Rovers", "Casuals", MatchResult::WillBePlayed));
        matches.push(fixture(6, "Rovers", "Casuals", MatchResult::WillBePlayed));

        let mut fixtures = Fixtures::new(matches);
        fixtures.set_result_filter(ResultFilter::Upcoming);

        let filtered = fixtures.filtered();
        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .iter()
            .all(|m| m.result == MatchResult::WillBePlayed));
    }

    #[test]
    fn filters_combine_as_intersection() {
        let matches = vec![
            fixture(0, "Rovers", "Athletic", MatchResult::Win),
            fixture(1, "Rovers", "Wanderers", MatchResult::Win),
            fixture(2, "Casuals", "Athletic", MatchResult::Win),
            fixture(3, "Rovers", "Athletic", MatchResult::Loss),
        ];

        let mut fixtures = Fixtures::new(matches);
        fixtures.set_result_filter(ResultFilter::Win);
        fixtures.set_team_filter(TeamFilter::Team("Athletic".to_string()));

        let filtered = fixtures.filtered();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|m| {
            m.result == MatchResult::Win && (m.team1 == "Athletic" || m.team2 == "Athletic")
        }));
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let fixtures = Fixtures::new(Vec::new());
        assert_eq!(fixtures.total_pages(), 0);
        assert!(fixtures.visible_page().is_empty());
        assert!(fixtures.teams().is_empty());
    }

    #[test]
    fn unknown_team_yields_empty_view() {
        let mut fixtures = Fixtures::new(sample(14, 5));
        fixtures.set_team_filter(TeamFilter::Team("Vanguards".to_string()));

        assert!(fixtures.filtered().is_empty());
        assert!(fixtures.visible_page().is_empty());
        assert_eq!(fixtures.total_pages(), 0);
    }

    #[test]
    fn changing_filter_resets_page() {
        let mut fixtures = Fixtures::new(sample(25, 20));
        fixtures.paginate(2);
        assert_eq!(fixtures.current_page(), 2);

        fixtures.set_result_filter(ResultFilter::Win);
        assert_eq!(fixtures.current_page(), 1);

        fixtures.paginate(2);
        fixtures.set_team_filter(TeamFilter::Team("Rovers".to_string()));
        assert_eq!(fixtures.current_page(), 1);
    }

    #[test]
    fn team_list_ignores_active_filters() {
        let mut matches = sample(5, 5);
        matches.push(fixture(6, "Athletic", "Rovers", MatchResult::Loss));
        let mut fixtures = Fixtures::new(matches);

        assert_eq!(fixtures.teams(), ["Athletic", "Rovers", "Wanderers"]);

        fixtures.set_result_filter(ResultFilter::Win);
        fixtures.set_team_filter(TeamFilter::Team("Wanderers".to_string()));
        assert_eq!(fixtures.teams(), ["Athletic", "Rovers", "Wanderers"]);
    }

    #[test]
    fn out_of_range_page_renders_empty() {
        let mut fixtures = Fixtures::new(sample(25, 0));

        // The page number comes straight from a query parameter, so any
        // usize must be survivable.
        fixtures.paginate(usize::MAX);
        assert!(fixtures.visible_page().is_empty());

        fixtures.paginate(0);
        assert_eq!(fixtures.visible_page().len(), 12);

        fixtures.paginate(4);
        assert!(fixtures.visible_page().is_empty());
    }

    #[test]
    fn page_navigation_clamps_at_boundaries() {
        let mut fixtures = Fixtures::new(sample(25, 0));

        fixtures.prev_page();
        assert_eq!(fixtures.current_page(), 1);

        fixtures.paginate(3);
        fixtures.next_page();
        assert_eq!(fixtures.current_page(), 3);

        fixtures.prev_page();
        assert_eq!(fixtures.current_page(), 2);
    }

    #[test]
    fn filtered_preserves_order() {
        let matches = vec![
            fixture(0, "Rovers", "Athletic", MatchResult::Win),
            fixture(1, "Rovers", "Wanderers", MatchResult::Loss),
            fixture(2, "Rovers", "Casuals", MatchResult::Win),
        ];
        let expected = [matches[0].id, matches[2].id];

        let mut fixtures = Fixtures::new(matches);
        fixtures.set_result_filter(ResultFilter::Win);

        let ids = fixtures.filtered().iter().map(|m| m.id).collect::<Vec<_>>();
        assert_eq!(ids, expected);
    }

    #[test]
    fn replacing_matches_recomputes_teams() {
        let mut fixtures = Fixtures::new(sample(5, 0));
        fixtures.paginate(2);

        fixtures.replace_matches(vec![fixture(0, "Casuals", "Athletic", MatchResult::Draw)]);
        assert_eq!(fixtures.current_page(), 1);
        assert_eq!(fixtures.teams(), ["Athletic", "Casuals"]);
    }
}
