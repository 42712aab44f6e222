use common::preview::Preview;
use common::sequence::RequestSeq;

#[derive(Default)]
pub struct PreviewPage {
    pub preview: Option<Preview>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub seq: RequestSeq,
}
