#[cfg(test)]
mod tests {
    use crate::data::user_library;
    use crate::services::library_filter::{filter, FilterState, GenreTab, AVAILABLE_TAGS};

    fn sample() -> Vec<crate::models::Book> {
        user_library("mock-user")
    }

    #[test]
    fn test_all_tab_is_noop() {
        let books = sample();
        let state = FilterState::default();
        assert_eq!(filter(&books, &state), books);
    }

    #[test]
    fn test_fiction_tab_matches_genre_case_insensitively() {
        let books = sample();
        let state = FilterState::for_tab(GenreTab::Fiction);
        let result = filter(&books, &state);

        // Exactly the two books whose genre is "Fiction". "Science
        // Fiction" does not qualify: the tab compares whole genres.
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|b| b.genre.eq_ignore_ascii_case("fiction")));
        let titles: Vec<&str> = result.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["The Midnight Library", "Where the Crawdads Sing"]
        );
    }

    #[test]
    fn test_non_fiction_tab() {
        let books = sample();
        let result = filter(&books, &FilterState::for_tab(GenreTab::NonFiction));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Educated");
    }

    #[test]
    fn test_custom_tab_keeps_categorized_books() {
        let books = sample();
        let result = filter(&books, &FilterState::for_tab(GenreTab::Custom));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].custom_category.as_deref(), Some("Book Club"));
    }

    #[test]
    fn test_custom_tab_ignores_empty_category() {
        let mut books = sample();
        books[0].custom_category = Some(String::new());
        let result = filter(&books, &FilterState::for_tab(GenreTab::Custom));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Where the Crawdads Sing");
    }

    #[test]
    fn test_tag_filter_exact_match() {
        let books = sample();
        let state = FilterState {
            tag_filter: Some("wishlist".to_string()),
            ..FilterState::default()
        };
        let result = filter(&books, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Project Hail Mary");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let books = sample();
        let state = FilterState {
            search_query: "mid".to_string(),
            ..FilterState::default()
        };
        let result = filter(&books, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "The Midnight Library");
    }

    #[test]
    fn test_search_matches_author_too() {
        let books = sample();
        let state = FilterState {
            search_query: "WEIR".to_string(),
            ..FilterState::default()
        };
        let result = filter(&books, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].author, "Andy Weir");
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let books = sample();
        // Fiction tab + "reading" tag + a query matching only one title.
        let state = FilterState {
            tab: GenreTab::Fiction,
            tag_filter: Some("reading".to_string()),
            search_query: "crawdads".to_string(),
        };
        let result = filter(&books, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Where the Crawdads Sing");

        // Tightening any one criterion to a non-match empties the result.
        let state = FilterState {
            tag_filter: Some("completed".to_string()),
            ..state
        };
        assert!(filter(&books, &state).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let books = sample();
        for tab in GenreTab::all_tabs() {
            let state = FilterState {
                tab: *tab,
                tag_filter: Some("purchased".to_string()),
                search_query: "the".to_string(),
            };
            let once = filter(&books, &state);
            let twice = filter(&once, &state);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_tag_toggle_is_exclusive() {
        let mut state = FilterState::default();

        state.toggle_tag("purchased");
        assert_eq!(state.tag_filter.as_deref(), Some("purchased"));

        // Selecting a different tag replaces, never stacks.
        state.toggle_tag("wishlist");
        assert_eq!(state.tag_filter.as_deref(), Some("wishlist"));

        // Re-selecting the active tag clears it.
        state.toggle_tag("wishlist");
        assert_eq!(state.tag_filter, None);
    }

    #[test]
    fn test_tab_round_trips_through_str() {
        for tab in GenreTab::all_tabs() {
            assert_eq!(GenreTab::from_str(tab.as_str()), *tab);
        }
        assert_eq!(GenreTab::from_str("unknown"), GenreTab::All);
    }

    #[test]
    fn test_available_tags_cover_sample_library() {
        let books = sample();
        for book in &books {
            for tag in &book.tags {
                assert!(AVAILABLE_TAGS.contains(&tag.as_str()), "unknown tag {tag}");
            }
        }
    }
}
