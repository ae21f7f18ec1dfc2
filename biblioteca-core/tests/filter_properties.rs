//! Property tests for the client-side search/filter engine

use biblioteca_core::{filter_livros, AppState, Livro};
use proptest::prelude::*;

fn livro_strategy() -> impl Strategy<Value = Livro> {
    (
        1i64..10_000,
        "[a-zA-Z ]{0,12}",
        "[a-zA-Z ]{0,12}",
        proptest::option::of("[a-zA-Z ]{0,8}"),
        1000i32..=2030,
        any::<bool>(),
    )
        .prop_map(|(id, titulo, autor, editora, ano, disponivel)| {
            let mut livro = Livro::new(id, titulo, autor, "isbn", ano).with_disponivel(disponivel);
            livro.editora = editora;
            livro
        })
}

proptest! {
    #[test]
    fn availability_filter_excludes_unavailable(
        livros in proptest::collection::vec(livro_strategy(), 0..20),
        termo in "[a-zA-Z]{0,3}",
    ) {
        let result = filter_livros(&livros, &termo, true);
        prop_assert!(result.iter().all(|l| l.disponivel));

        let unchecked = filter_livros(&livros, &termo, false);
        let expected: Vec<_> = unchecked.into_iter().filter(|l| l.disponivel).collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn empty_term_unchecked_is_identity(
        livros in proptest::collection::vec(livro_strategy(), 0..20),
    ) {
        prop_assert_eq!(filter_livros(&livros, "   ", false), livros);
    }

    #[test]
    fn matching_ignores_case(
        livros in proptest::collection::vec(livro_strategy(), 0..20),
        termo in "[a-zA-Z]{1,3}",
    ) {
        prop_assert_eq!(
            filter_livros(&livros, &termo.to_uppercase(), false),
            filter_livros(&livros, &termo.to_lowercase(), false)
        );
    }

    #[test]
    fn result_preserves_order(
        livros in proptest::collection::vec(livro_strategy(), 0..20),
        termo in "[a-zA-Z]{0,2}",
        somente_disponiveis in any::<bool>(),
    ) {
        let result = filter_livros(&livros, &termo, somente_disponiveis);
        let mut remaining = livros.iter();
        for livro in &result {
            prop_assert!(remaining.any(|l| l == livro));
        }
    }

    #[test]
    fn clearing_search_restores_authoritative_list(
        livros in proptest::collection::vec(livro_strategy(), 0..20),
        termo in "[a-zA-Z]{0,3}",
        somente_disponiveis in any::<bool>(),
    ) {
        let mut state = AppState::new();
        state.replace_livros(livros.clone());
        state.search.termo = termo;
        state.search.somente_disponiveis = somente_disponiveis;
        state.apply_filters();

        state.clear_search();
        prop_assert_eq!(state.filtered(), livros.as_slice());
    }
}

#[test]
fn test_tolkien_matches_capitalized_author() {
    let livros = vec![
        Livro::new(1, "O Hobbit", "Tolkien", "1", 1937),
        Livro::new(2, "Duna", "Herbert", "2", 1965),
    ];
    let result = filter_livros(&livros, "tolkien", false);
    assert_eq!(result, vec![livros[0].clone()]);
}
