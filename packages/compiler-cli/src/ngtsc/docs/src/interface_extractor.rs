// Interface Extractor
//
// Extracts documentation from interface declarations.

use super::class_extractor::ClassExtractor;
use super::entities::*;
use super::host::DocsHost;
use crate::ngtsc::reflection::ClassLikeNode;

/// Extracts the entry for an interface. Interfaces never carry Angular
/// metadata, so this is the generic class pass with no specialization.
/// Method signatures never count as overload implementations, so
/// interface methods do not appear as members.
pub fn extract_interface<D, H>(declaration: &D, host: &H) -> InterfaceEntry
where
    D: ClassLikeNode,
    H: DocsHost<D> + ?Sized,
{
    ClassExtractor::new(declaration, host).extract_base()
}
