//! Request hooks applied to list queries before lookups

use std::sync::Arc;

use super::error::ApiError;
use super::params::Params;

/// Mutates the parameters of a list query before it is sent
pub type RequestHook = Arc<dyn Fn(&mut Params) -> Result<(), ApiError> + Send + Sync>;

pub fn hook<F>(f: F) -> RequestHook
where
    F: Fn(&mut Params) -> Result<(), ApiError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Scope lookups to a project
pub fn with_project(project_id: impl Into<String>) -> RequestHook {
    let project_id = project_id.into();
    hook(move |params| {
        if project_id.is_empty() {
            return Err(ApiError::Hook("project id must not be empty".to_string()));
        }
        params.set("projectid", &project_id);
        Ok(())
    })
}

pub fn with_domain(domain_id: impl Into<String>) -> RequestHook {
    let domain_id = domain_id.into();
    hook(move |params| {
        params.set("domainid", &domain_id);
        Ok(())
    })
}

pub fn with_zone(zone_id: impl Into<String>) -> RequestHook {
    let zone_id = zone_id.into();
    hook(move |params| {
        params.set("zoneid", &zone_id);
        Ok(())
    })
}

/// Include resources of all accounts the caller may see
pub fn with_list_all() -> RequestHook {
    hook(|params| {
        params.set("listall", true);
        Ok(())
    })
}

pub fn with_page_size(page_size: u32) -> RequestHook {
    hook(move |params| {
        params.set("pagesize", page_size);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_set_parameters() {
        let mut params = Params::new().add("name", "web");
        for h in [
            with_project("p1"),
            with_domain("d1"),
            with_zone("z1"),
            with_list_all(),
            with_page_size(500),
        ] {
            h(&mut params).unwrap();
        }

        assert_eq!(params.get("projectid"), Some("p1"));
        assert_eq!(params.get("domainid"), Some("d1"));
        assert_eq!(params.get("zoneid"), Some("z1"));
        assert_eq!(params.get("listall"), Some("true"));
        assert_eq!(params.get("pagesize"), Some("500"));
        assert_eq!(params.get("name"), Some("web"));
    }

    #[test]
    fn empty_project_is_rejected() {
        let mut params = Params::new();
        let err = with_project("")(&mut params).unwrap_err();
        assert!(matches!(err, ApiError::Hook(_)));
    }
}
