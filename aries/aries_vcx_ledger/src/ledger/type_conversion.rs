/// Conversion between the canonical object model and one ledger wire representation.
/// `Args` carries the context the wire form leaves implicit, such as identifiers the
/// ledger stores next to the document rather than inside it.
pub trait Convert {
    type Args;
    type Target;
    type Error;

    fn convert(self, args: Self::Args) -> Result<Self::Target, Self::Error>;
}
