//! Name and id lookups on top of list commands.
//!
//! These are best-effort conveniences: a list query filtered by name (or
//! keyword) may match more entities than the caller expects.

use super::command::Command;
use super::error::ApiError;
use super::options::RequestHook;
use super::Client;

/// An entity with an id and a human readable name
pub trait NamedEntity {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A list command usable for lookups
pub trait ListCommand: Command + Sized {
    type Item: NamedEntity;

    /// Entity kind used in error messages
    const ENTITY: &'static str;

    /// List filtered by name, or by keyword for entities without a name filter
    fn filter_by_name(name: &str) -> Self;

    fn filter_by_id(id: &str) -> Self;

    /// Reported count and the listed items
    fn into_items(response: Self::Response) -> (usize, Vec<Self::Item>);
}

/// Pick the entity for `term` out of a list result.
///
/// Zero results is not found and one result is taken as is. With more
/// results the first exact name match wins, otherwise the result is
/// ambiguous.
pub fn select_by_name<T: NamedEntity>(
    entity: &'static str,
    term: &str,
    count: usize,
    items: Vec<T>,
) -> Result<T, ApiError> {
    let not_found = || ApiError::NotFound {
        entity,
        term: term.to_string(),
    };

    match count {
        0 => Err(not_found()),
        1 => items.into_iter().next().ok_or_else(not_found),
        _ => items
            .into_iter()
            .find(|item| item.name() == term)
            .ok_or_else(|| ApiError::Ambiguous {
                entity,
                term: term.to_string(),
                count,
            }),
    }
}

/// Exactly one result is required when looking up by id.
pub fn select_by_id<T: NamedEntity>(
    entity: &'static str,
    id: &str,
    count: usize,
    items: Vec<T>,
) -> Result<T, ApiError> {
    match count {
        0 => Err(ApiError::NotFound {
            entity,
            term: id.to_string(),
        }),
        1 => items.into_iter().next().ok_or_else(|| ApiError::NotFound {
            entity,
            term: id.to_string(),
        }),
        _ => Err(ApiError::Ambiguous {
            entity,
            term: id.to_string(),
            count,
        }),
    }
}

impl Client {
    async fn list_for_lookup<C: ListCommand>(
        &self,
        command: C,
        opts: &[RequestHook],
    ) -> Result<(usize, Vec<C::Item>), ApiError> {
        let mut params = command.to_params();
        for hook in self.config().hooks.iter().chain(opts) {
            hook(&mut params)?;
        }

        let response = self.execute_params::<C>(params, None).await?;
        Ok(C::into_items(response))
    }

    /// Resolve a name (or keyword) to an entity id
    pub async fn lookup_id<C: ListCommand>(
        &self,
        name: &str,
        opts: &[RequestHook],
    ) -> Result<String, ApiError> {
        let (count, items) = self
            .list_for_lookup(C::filter_by_name(name), opts)
            .await?;
        tracing::debug!(entity = C::ENTITY, term = name, count, "Lookup by name");

        select_by_name(C::ENTITY, name, count, items).map(|item| item.id().to_string())
    }

    /// Fetch a single entity by id
    pub async fn lookup_by_id<C: ListCommand>(
        &self,
        id: &str,
        opts: &[RequestHook],
    ) -> Result<C::Item, ApiError> {
        let (count, items) = self.list_for_lookup(C::filter_by_id(id), opts).await?;
        select_by_id(C::ENTITY, id, count, items)
    }

    /// Resolve a name to an id, then fetch the entity by that id
    pub async fn lookup_by_name<C: ListCommand>(
        &self,
        name: &str,
        opts: &[RequestHook],
    ) -> Result<C::Item, ApiError> {
        let id = self.lookup_id::<C>(name, opts).await?;
        self.lookup_by_id::<C>(&id, opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Entity {
        id: &'static str,
        name: &'static str,
    }

    impl NamedEntity for Entity {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn entity(id: &'static str, name: &'static str) -> Entity {
        Entity { id, name }
    }

    #[test]
    fn no_results_is_not_found() {
        let err = select_by_name::<Entity>("account", "web", 0, vec![]).unwrap_err();
        match err {
            ApiError::NotFound { entity, term } => {
                assert_eq!(entity, "account");
                assert_eq!(term, "web");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn single_result_is_taken_even_without_exact_name() {
        let found = select_by_name("account", "web", 1, vec![entity("a1", "web-frontend")]).unwrap();
        assert_eq!(found.id, "a1");
    }

    #[test]
    fn several_results_pick_exact_name() {
        let found = select_by_name(
            "account",
            "web",
            3,
            vec![
                entity("a1", "web-frontend"),
                entity("a2", "web"),
                entity("a3", "webhooks"),
            ],
        )
        .unwrap();
        assert_eq!(found.id, "a2");
    }

    #[test]
    fn several_results_first_exact_match_wins() {
        let found = select_by_name(
            "account",
            "web",
            2,
            vec![entity("a1", "web"), entity("a2", "web")],
        )
        .unwrap();
        assert_eq!(found.id, "a1");
    }

    #[test]
    fn several_results_without_exact_name_are_ambiguous() {
        let err = select_by_name(
            "account",
            "web",
            2,
            vec![entity("a1", "web-frontend"), entity("a2", "webhooks")],
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Ambiguous { count: 2, .. }));
    }

    #[test]
    fn lookup_by_id_requires_exactly_one() {
        assert!(matches!(
            select_by_id::<Entity>("user", "u1", 0, vec![]),
            Err(ApiError::NotFound { .. })
        ));
        assert_eq!(
            select_by_id("user", "u1", 1, vec![entity("u1", "admin")])
                .unwrap()
                .name,
            "admin"
        );
        assert!(matches!(
            select_by_id(
                "user",
                "u1",
                2,
                vec![entity("u1", "admin"), entity("u1", "admin")]
            ),
            Err(ApiError::Ambiguous { .. })
        ));
    }
}
