use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::error::{Result, ShortCodeError};
use crate::generate::ShortCodeGenerator;
use crate::parse::parse_short_code;

/// A stored mapping from a short code to the URL it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The short code, also the lookup key.
    pub short: String,
    /// The original long URL.
    pub long: String,
    /// Number of times the link was re-submitted or followed.
    pub hits: u64,
}

impl Link {
    /// Full shortened URL under `url_root`, e.g. `http://127.0.0.1:5000/MDIN8D`.
    #[must_use]
    pub fn short_url(&self, url_root: &str) -> String {
        format!("{}/{}", url_root.trim_end_matches('/'), self.short)
    }
}

/// In-memory link table keyed by short code.
///
/// Codes are derived from the submitted URL, so two different URLs that
/// hash to the same truncated code share one record and the most recent
/// submission wins. Callers sharing a store across threads wrap it in
/// their own lock.
#[derive(Debug, Clone)]
pub struct LinkStore {
    generator: ShortCodeGenerator,
    links: HashMap<String, Link>,
}

impl LinkStore {
    #[must_use]
    pub fn new(generator: ShortCodeGenerator) -> Self {
        Self {
            generator,
            links: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn generator(&self) -> &ShortCodeGenerator {
        &self.generator
    }

    /// Shortens `long`, creating or refreshing its record.
    ///
    /// Behaviour:
    /// 1. Blank input is rejected
    /// 2. The code is derived from the submitted bytes as-is
    /// 3. A new code gets a record with zero hits
    /// 4. An existing code has its URL overwritten and its hit counter bumped
    ///
    /// # Errors
    ///
    /// Returns `EmptyUrl` if `long` is empty or only whitespace.
    pub fn shorten(&mut self, long: &str) -> Result<&Link> {
        if long.trim().is_empty() {
            return Err(ShortCodeError::EmptyUrl);
        }

        let short = self.generator.code_for(long);
        let link = match self.links.entry(short) {
            Entry::Occupied(entry) => {
                let link = entry.into_mut();
                if link.long != long {
                    warn!(code = %link.short, previous = %link.long, url = %long, "short code collision, overwriting link");
                    long.clone_into(&mut link.long);
                }
                link.hits += 1;
                debug!(code = %link.short, hits = link.hits, "refreshed existing link");
                link
            }
            Entry::Vacant(entry) => {
                let short = entry.key().clone();
                debug!(code = %short, url = %long, "created link");
                entry.insert(Link {
                    short,
                    long: long.to_string(),
                    hits: 0,
                })
            }
        };

        Ok(&*link)
    }

    /// Follows a short code, counting the hit and returning the record to redirect to.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCode` if `short` is not a well-formed code for this
    /// store's encoding, or `NotFound` if no link has that code.
    pub fn follow(&mut self, short: &str) -> Result<&Link> {
        let code = parse_short_code(short, self.generator.encoding())?;
        match self.links.get_mut(&code) {
            Some(link) => {
                link.hits += 1;
                debug!(code = %link.short, hits = link.hits, "followed link");
                Ok(&*link)
            }
            None => {
                debug!(code = %code, "link not found");
                Err(ShortCodeError::NotFound { code })
            }
        }
    }

    /// Looks up a link without counting a hit.
    #[must_use]
    pub fn get(&self, short: &str) -> Option<&Link> {
        self.links.get(short)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
