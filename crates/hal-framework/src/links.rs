//! Converter for a resource's link collection.

use crate::engine::{to_token, Converter, RenderKind, Renderable, SerializationEngine};
use crate::error::HalError;
use crate::sink::DocumentSink;

/// Reserved property holding a resource's links.
pub const LINKS_PROPERTY: &str = "_links";

/// Writes `"_links": { rel: link, rel: [link, link] }` into the current
/// object. A relation with one link is written as that link's object, a
/// relation with several as an array.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinksWriter;

impl Converter for LinksWriter {
    fn can_handle(&self, kind: RenderKind) -> bool {
        kind == RenderKind::Links
    }

    fn write(
        &self,
        sink: &mut dyn DocumentSink,
        value: Renderable<'_>,
        _engine: &dyn SerializationEngine,
    ) -> Result<(), HalError> {
        let Renderable::Links(links) = value else {
            return Err(HalError::Unhandled(value.kind()));
        };

        sink.write_property_name(LINKS_PROPERTY)?;
        sink.begin_object()?;
        for (rel, items) in links.iter() {
            sink.write_property_name(rel)?;
            match items {
                [single] => sink.write_raw_token(&to_token(single)?)?,
                many => {
                    sink.begin_array()?;
                    for link in many {
                        sink.write_raw_token(&to_token(link)?)?;
                    }
                    sink.end_array()?;
                }
            }
        }
        sink.end_object()
    }
}
