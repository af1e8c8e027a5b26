use crate::error::{Result, UniqueKeyError};
use crate::unique::generate_unique_value;
use async_trait::async_trait;
use keywell_core::{Document, ReadCollection, ID_FIELD};
use keywell_generator::KeyGenerator;
use std::sync::Arc;
use tracing::warn;

/// A hook that prepares a document immediately before its first save.
///
/// Hosts call [`before_create`](CreateHook::before_create) on every new
/// document and abort the save when it fails. Documents that have
/// already been persisted must pass through untouched.
#[async_trait]
pub trait CreateHook: Send + Sync + 'static {
    /// Mutates `document` in place ahead of its creation.
    async fn before_create(&self, document: &mut Document) -> Result<()>;
}

/// Assigns a collection-unique value to one field of every new document.
///
/// The hook probes the collection until the generator produces a value
/// no stored document carries, then writes that value into the
/// document. Already-persisted documents are left alone, so the value
/// survives later saves.
///
/// The collection handle is shared: the host keeps inserting through
/// its own clone of the [`Arc`] while the hook probes through this one.
///
/// # Example
///
/// ```rust,no_run
/// use keywell_generator::AlphanumericGenerator;
/// use keywell_hook::{CreateHook, UniqueKey};
/// use keywell_storage::InMemoryCollection;
/// use keywell_core::{Collection, Document};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let collection = Arc::new(InMemoryCollection::new());
/// let generator = AlphanumericGenerator::builder().length(6).build();
/// let hook = UniqueKey::for_field("code", collection.clone(), generator)?;
///
/// let mut document = Document::new().with("title", "hello");
/// hook.before_create(&mut document).await?;
/// collection.insert(document).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UniqueKey<C, G> {
    collection: Arc<C>,
    generator: Arc<G>,
    field: String,
}

impl<C: ReadCollection, G: KeyGenerator> UniqueKey<C, G> {
    /// Creates a hook that fills the `_id` field.
    pub fn new(collection: Arc<C>, generator: G) -> Self {
        Self {
            collection,
            generator: Arc::new(generator),
            field: ID_FIELD.to_string(),
        }
    }

    /// Creates a hook that fills an arbitrary field.
    pub fn for_field(
        field: impl Into<String>,
        collection: Arc<C>,
        generator: G,
    ) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(UniqueKeyError::InvalidFieldName(
                "must not be empty".to_string(),
            ));
        }
        Ok(Self {
            collection,
            generator: Arc::new(generator),
            field,
        })
    }

    /// The field this hook assigns.
    pub fn field(&self) -> &str {
        &self.field
    }
}

#[async_trait]
impl<C: ReadCollection, G: KeyGenerator> CreateHook for UniqueKey<C, G> {
    async fn before_create(&self, document: &mut Document) -> Result<()> {
        if !document.is_new() {
            return Ok(());
        }

        // `_id` is expected to carry a store-assigned placeholder, so only
        // user-visible fields warn before being replaced.
        if self.field != ID_FIELD {
            if let Some(previous) = document.get(&self.field) {
                if !previous.is_unset() {
                    warn!(
                        field = %self.field,
                        previous = %previous,
                        "overwriting existing value with a generated unique value"
                    );
                }
            }
        }

        let value = generate_unique_value(
            self.collection.as_ref(),
            document,
            &self.field,
            self.generator.as_ref(),
        )
        .await?;
        document.set(self.field.as_str(), value);
        Ok(())
    }
}
