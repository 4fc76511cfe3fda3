use showcase_test_utils::prelude::*;
