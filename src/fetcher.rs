use crate::agent::{ItemKey, ProfileStore};
use crate::config::Config;
use crate::error::Result;
use crate::model::{Profile, ProfileRequest};
use tracing::{debug, error};

/// Looks up a single profile per request. The store is built once and shared
/// across invocations of a warm function.
pub struct ProfileFetcher<S> {
    store: S,
    config: Config,
}

impl<S: ProfileStore> ProfileFetcher<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    pub fn table_for<'a>(&'a self, request: &'a ProfileRequest) -> &'a str {
        self.config.resolve_table(request.table_override())
    }

    /// `Ok(None)` means the table has no item under the requested keys.
    pub async fn fetch(&self, request: &ProfileRequest) -> Result<Option<Profile>> {
        let table_name = self.table_for(request);
        let key = ItemKey::new(request.pk.as_str(), request.sk.as_str());
        debug!(table = table_name, pk = %key.pk, sk = %key.sk, "GetItem");

        let Some(item) = self.store.get_item(table_name, &key).await? else {
            return Ok(None);
        };

        let profile = match Profile::from_item(item.clone()) {
            Ok(profile) => profile,
            Err(e) => {
                error!(table = table_name, pk = %key.pk, sk = %key.sk, error = %e, "stored item does not match profile shape");
                Profile::salvage(&item)
            }
        };
        Ok(Some(profile))
    }
}
