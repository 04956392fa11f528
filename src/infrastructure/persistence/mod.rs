//! History persistence adapters

mod supabase;

pub use supabase::SupabaseHistoryStore;
