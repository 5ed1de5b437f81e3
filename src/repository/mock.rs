//! Mock product source for isolating the listing controller in tests.

use mockall::mock;

use crate::domain::product::ResultPage;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductQuery, ProductReader};

mock! {
    pub ProductSource {}

    impl ProductReader for ProductSource {
        fn get_results(&self, query: &ProductQuery) -> RepositoryResult<ResultPage>;
    }
}
