use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `punches` table exists.
fn punches_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='punches'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `punches` table has an `origin` column.
fn punches_has_origin_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('punches')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "origin" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `punches` table with the current schema.
///
/// The unique index over (shop, employee, date, kind, time) is the
/// last-resort guard against duplicate concurrent submissions; the
/// validator normally rejects duplicates before the insert is attempted.
/// `ifnull(employee_id, 0)` keeps shop-level punches (NULL employee) from
/// escaping the constraint, since SQLite treats NULLs as distinct.
fn create_punches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            shop_id      INTEGER NOT NULL,
            employee_id  INTEGER,
            date_at      TEXT NOT NULL,
            time_at      TEXT NOT NULL,
            resolved_at  TEXT NOT NULL,
            shift_start  TEXT NOT NULL,
            shift_end    TEXT NOT NULL,
            buffer_hours INTEGER NOT NULL DEFAULT 3,
            kind         TEXT NOT NULL CHECK(kind IN ('day_in','break_start','break_end','day_out')),
            comment      TEXT DEFAULT '',
            origin       TEXT NOT NULL DEFAULT 'api' CHECK(origin IN ('api','web')),
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_bucket ON punches(shop_id, employee_id, date_at);
        CREATE INDEX IF NOT EXISTS idx_punches_date_kind ON punches(date_at, kind);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_punches_dedup
            ON punches(shop_id, ifnull(employee_id, 0), date_at, kind, time_at);
        "#,
    )?;
    Ok(())
}

/// Add the `origin` column to databases created before it existed.
fn migrate_add_origin_column(conn: &Connection) -> Result<()> {
    let version = "20250512_0001_add_punch_origin";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !punches_has_origin_column(conn)? {
        conn.execute(
            "ALTER TABLE punches ADD COLUMN origin TEXT NOT NULL DEFAULT 'api' CHECK(origin IN ('api','web'));",
            [],
        )?;
    }

    // 2) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added origin column to punches')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the punches table
    if !punches_table_exists(conn)? {
        create_punches_table(conn)?;
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_punches_bucket ON punches(shop_id, employee_id, date_at);
            CREATE INDEX IF NOT EXISTS idx_punches_date_kind ON punches(date_at, kind);
            CREATE UNIQUE INDEX IF NOT EXISTS idx_punches_dedup
                ON punches(shop_id, ifnull(employee_id, 0), date_at, kind, time_at);
            "#,
        )?;

        migrate_add_origin_column(conn)?;
    }

    Ok(())
}
