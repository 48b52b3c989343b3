/// An issue as reported by the hosting API, reduced to the fields the digest uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub url: String,
}
