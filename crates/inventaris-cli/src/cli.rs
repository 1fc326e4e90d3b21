//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ApiClient
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and a `From` conversion into the core parameter type, so help text and
//! argument parsing stay in this layer while validation stays in core. The
//! [`Cli`] handler at the bottom wires parsed commands to [`ApiClient`]
//! calls and renders the results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use inventaris_core::params::*;
use inventaris_core::{
    Activities, ApiClient, Availabilities, Borrowings, Categories, CreateResult, DeleteResult,
    ItemCondition, OperationStatus, Role, UpdateResult, Users,
};
use jiff::civil::Date;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Session commands
// ============================================================================

/// Log in against the backend and store the session locally
#[derive(Args)]
pub struct LoginArgs {
    /// Login email
    pub email: String,
    /// Password
    #[arg(short, long)]
    pub password: String,
}

impl From<LoginArgs> for Credentials {
    fn from(val: LoginArgs) -> Self {
        Credentials {
            email: val.email,
            password: val.password,
        }
    }
}

// ============================================================================
// Product commands
// ============================================================================

/// Create a new product (admin)
#[derive(Args)]
pub struct CreateProductArgs {
    /// Product name
    pub name: String,
    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Category ID to file the product under
    #[arg(short, long)]
    pub category: Option<u64>,
    /// Total stock quantity
    #[arg(short, long, default_value_t = 1)]
    pub stock: u32,
    /// Minimum-stock threshold
    #[arg(long)]
    pub minimum_stock: Option<u32>,
    /// Photo to upload (jpg, jpeg, png, gif, webp; max 5MB)
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

impl From<CreateProductArgs> for CreateProduct {
    fn from(val: CreateProductArgs) -> Self {
        CreateProduct {
            name: val.name,
            description: val.description,
            category_id: val.category,
            total_stock: val.stock,
            minimum_stock: val.minimum_stock,
            photo: val.photo,
        }
    }
}

/// Update an existing product (admin)
#[derive(Args)]
pub struct UpdateProductArgs {
    /// ID of the product to update
    pub id: u64,
    /// Updated name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Updated description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Updated category ID
    #[arg(short, long)]
    pub category: Option<u64>,
    /// Updated total stock
    #[arg(short, long)]
    pub stock: Option<u32>,
    /// Updated minimum-stock threshold
    #[arg(long)]
    pub minimum_stock: Option<u32>,
    /// Replacement photo (jpg, jpeg, png, gif, webp; max 5MB)
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

impl From<UpdateProductArgs> for UpdateProduct {
    fn from(val: UpdateProductArgs) -> Self {
        UpdateProduct {
            id: val.id,
            name: val.name,
            description: val.description,
            category_id: val.category,
            total_stock: val.stock,
            minimum_stock: val.minimum_stock,
            photo: val.photo,
        }
    }
}

/// Delete a resource by ID, guarded by an explicit confirmation flag
#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the resource to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List products with derived availability
    #[command(aliases = ["l", "ls"])]
    List {
        /// Skip the borrowing join and show the raw product records
        #[arg(long)]
        raw: bool,
    },
    /// Show one product with derived availability
    #[command(alias = "s")]
    Show { id: u64 },
    /// List products the backend flags as available
    Available,
    /// List products at or below their minimum-stock threshold
    LowStock,
    /// Create a new product (admin)
    #[command(alias = "c")]
    Create(CreateProductArgs),
    /// Update a product (admin)
    #[command(alias = "u")]
    Update(UpdateProductArgs),
    /// Delete a product (admin)
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Category commands
// ============================================================================

/// Create a new category (admin)
#[derive(Args)]
pub struct CreateCategoryArgs {
    /// Category name
    pub name: String,
    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<CreateCategoryArgs> for CreateCategory {
    fn from(val: CreateCategoryArgs) -> Self {
        CreateCategory {
            name: val.name,
            description: val.description,
        }
    }
}

/// Update a category (admin)
#[derive(Args)]
pub struct UpdateCategoryArgs {
    /// ID of the category to update
    pub id: u64,
    /// Updated name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Updated description
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<UpdateCategoryArgs> for UpdateCategory {
    fn from(val: UpdateCategoryArgs) -> Self {
        UpdateCategory {
            id: val.id,
            name: val.name,
            description: val.description,
        }
    }
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a single category
    #[command(alias = "s")]
    Show { id: u64 },
    /// Create a new category (admin)
    #[command(alias = "c")]
    Create(CreateCategoryArgs),
    /// Update a category (admin)
    #[command(alias = "u")]
    Update(UpdateCategoryArgs),
    /// Delete a category (admin)
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Borrowing commands
// ============================================================================

/// Command-line argument representation of borrowing status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Waiting for an admin decision
    Pending,
    /// Approved, waiting for hand-off
    Approved,
    /// Item is out with the borrower
    Borrowed,
    /// Return submitted, waiting for verification
    PendingReturn,
    /// Return verified
    Returned,
    /// Rejected by an admin
    Rejected,
}

impl From<StatusArg> for inventaris_core::BorrowStatus {
    fn from(val: StatusArg) -> Self {
        use inventaris_core::BorrowStatus::*;
        match val {
            StatusArg::Pending => Pending,
            StatusArg::Approved => Approved,
            StatusArg::Borrowed => Borrowed,
            StatusArg::PendingReturn => PendingReturn,
            StatusArg::Returned => Returned,
            StatusArg::Rejected => Rejected,
        }
    }
}

/// Command-line argument representation of item condition values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ConditionArg {
    /// Good condition
    Baik,
    /// Lightly damaged
    RusakRingan,
    /// Heavily damaged
    RusakBerat,
    /// Lost
    Hilang,
}

impl From<ConditionArg> for ItemCondition {
    fn from(val: ConditionArg) -> Self {
        match val {
            ConditionArg::Baik => ItemCondition::Baik,
            ConditionArg::RusakRingan => ItemCondition::RusakRingan,
            ConditionArg::RusakBerat => ItemCondition::RusakBerat,
            ConditionArg::Hilang => ItemCondition::Hilang,
        }
    }
}

/// List borrowings with optional filters
#[derive(Args)]
pub struct ListBorrowingsArgs {
    /// Restrict to a single lifecycle status
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Restrict to a single product ID
    #[arg(short, long)]
    pub product: Option<u64>,
    /// Keep only borrowings past their planned return date
    #[arg(long)]
    pub overdue: bool,
}

impl From<ListBorrowingsArgs> for ListBorrowings {
    fn from(val: ListBorrowingsArgs) -> Self {
        ListBorrowings {
            status: val.status.map(Into::into),
            product_id: val.product,
            overdue: val.overdue,
        }
    }
}

/// Submit a new borrow request
#[derive(Args)]
pub struct RequestBorrowingArgs {
    /// ID of the product to borrow
    pub product_id: u64,
    /// Quantity to borrow (defaults to 1)
    #[arg(short, long)]
    pub quantity: Option<u32>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<Date>,
    /// Planned return date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<Date>,
    /// Purpose of the loan
    #[arg(long)]
    pub purpose: Option<String>,
}

impl From<RequestBorrowingArgs> for CreateBorrowing {
    fn from(val: RequestBorrowingArgs) -> Self {
        CreateBorrowing {
            product_id: val.product_id,
            quantity: val.quantity,
            borrow_date: val.from,
            planned_return_date: val.until,
            purpose: val.purpose,
        }
    }
}

/// Submit a return with photo evidence
///
/// The photo is mandatory and is validated locally (must be an image file,
/// at most 5MB) before anything is uploaded.
#[derive(Args)]
pub struct ReturnArgs {
    /// ID of the borrowing to return
    pub id: u64,
    /// Condition of the item at return
    #[arg(short, long)]
    pub condition: ConditionArg,
    /// Optional note for the admin verifying the return
    #[arg(short, long)]
    pub note: Option<String>,
    /// Photo evidence of the returned item
    #[arg(long)]
    pub photo: PathBuf,
}

impl From<ReturnArgs> for ReturnSubmission {
    fn from(val: ReturnArgs) -> Self {
        ReturnSubmission {
            borrowing_id: val.id,
            condition: Some(val.condition.into()),
            note: val.note,
            photo: Some(val.photo),
        }
    }
}

/// Extend an active loan's planned return date
#[derive(Args)]
pub struct ExtendArgs {
    /// ID of the borrowing to extend
    pub id: u64,
    /// New planned return date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Date,
    /// Stated reason for the extension
    #[arg(long)]
    pub reason: Option<String>,
}

impl From<ExtendArgs> for ExtendBorrowing {
    fn from(val: ExtendArgs) -> Self {
        ExtendBorrowing {
            borrowing_id: val.id,
            new_return_date: Some(val.until),
            reason: val.reason,
        }
    }
}

/// An admin decision on a borrowing, with an optional note
#[derive(Args)]
pub struct DecisionArgs {
    /// ID of the borrowing
    pub id: u64,
    /// Optional note recorded with the decision
    #[arg(short, long)]
    pub note: Option<String>,
}

#[derive(Subcommand)]
pub enum BorrowingCommands {
    /// List borrowings with optional filters
    #[command(aliases = ["l", "ls"])]
    List(ListBorrowingsArgs),
    /// Show a single borrowing
    #[command(alias = "s")]
    Show { id: u64 },
    /// Submit a new borrow request
    #[command(alias = "req")]
    Request(RequestBorrowingArgs),
    /// Submit a return with photo evidence
    #[command(alias = "ret")]
    Return(ReturnArgs),
    /// Extend an active loan's planned return date
    #[command(alias = "ext")]
    Extend(ExtendArgs),
    /// Approve a pending request (admin)
    Approve(DecisionArgs),
    /// Reject a pending request (admin)
    Reject(DecisionArgs),
    /// Record the physical hand-off of an approved request (admin)
    Handover { id: u64 },
    /// Verify a submitted return, releasing the stock (admin)
    Verify(DecisionArgs),
    /// List overdue borrowings (admin)
    Overdue,
    /// Show your own borrowing history
    History,
}

// ============================================================================
// User commands
// ============================================================================

/// Command-line argument representation of user roles
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Full management access
    Admin,
    /// Regular borrower
    Pengguna,
}

impl From<RoleArg> for Role {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::Admin => Role::Admin,
            RoleArg::Pengguna => Role::Pengguna,
        }
    }
}

/// Create a new user (admin)
#[derive(Args)]
pub struct CreateUserArgs {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Initial password (at least 6 characters)
    #[arg(short, long)]
    pub password: String,
    /// Role (defaults to pengguna)
    #[arg(short, long)]
    pub role: Option<RoleArg>,
}

impl From<CreateUserArgs> for CreateUser {
    fn from(val: CreateUserArgs) -> Self {
        CreateUser {
            name: val.name,
            email: val.email,
            password: val.password,
            role: val.role.map(Into::into),
        }
    }
}

/// Update a user (admin)
#[derive(Args)]
pub struct UpdateUserArgs {
    /// ID of the user to update
    pub id: u64,
    /// Updated display name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Updated email
    #[arg(short, long)]
    pub email: Option<String>,
    /// Replacement password
    #[arg(short, long)]
    pub password: Option<String>,
    /// Updated role
    #[arg(short, long)]
    pub role: Option<RoleArg>,
}

impl From<UpdateUserArgs> for UpdateUser {
    fn from(val: UpdateUserArgs) -> Self {
        UpdateUser {
            id: val.id,
            name: val.name,
            email: val.email,
            password: val.password,
            role: val.role.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users (admin)
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a single user (admin)
    #[command(alias = "s")]
    Show { id: u64 },
    /// Create a new user (admin)
    #[command(alias = "c")]
    Create(CreateUserArgs),
    /// Update a user (admin)
    #[command(alias = "u")]
    Update(UpdateUserArgs),
    /// Delete a user (admin)
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Show your profile as the backend sees it
    Profile,
}

// ============================================================================
// Activity commands
// ============================================================================

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// List the full activity log (admin)
    #[command(aliases = ["l", "ls"])]
    List,
    /// List your own activity
    Mine,
    /// List activity touching one row of one table (admin)
    Row {
        /// Table name (produk, kategori, peminjaman, pengguna)
        table: String,
        /// Row ID within the table
        id: u64,
    },
}

// ============================================================================
// Report commands
// ============================================================================

/// Command-line argument representation of report types
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ReportTypeArg {
    /// Full report covering every section
    Lengkap,
    /// Executive summary
    Ringkasan,
    /// Borrowing activity only
    Peminjaman,
    /// Inventory state only
    Inventaris,
}

impl From<ReportTypeArg> for ReportType {
    fn from(val: ReportTypeArg) -> Self {
        match val {
            ReportTypeArg::Lengkap => ReportType::Lengkap,
            ReportTypeArg::Ringkasan => ReportType::Ringkasan,
            ReportTypeArg::Peminjaman => ReportType::Peminjaman,
            ReportTypeArg::Inventaris => ReportType::Inventaris,
        }
    }
}

/// Parameters shared by report preview and download
#[derive(Args)]
pub struct ReportArgs {
    /// Report flavor
    #[arg(short = 't', long = "type", default_value = "lengkap")]
    pub report_type: ReportTypeArg,
    /// Inclusive start of the reporting window (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<Date>,
    /// Inclusive end of the reporting window (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<Date>,
}

impl From<&ReportArgs> for ReportRequest {
    fn from(val: &ReportArgs) -> Self {
        ReportRequest {
            report_type: val.report_type.into(),
            start_date: val.from,
            end_date: val.until,
        }
    }
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Preview a report as structured JSON (admin)
    #[command(alias = "p")]
    Preview(ReportArgs),
    /// Download a report as PDF (admin)
    #[command(alias = "d")]
    Download {
        #[command(flatten)]
        report: ReportArgs,
        /// Output path; defaults to a name derived from the report type
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ============================================================================
// Stats command
// ============================================================================

/// Show dashboard statistics
#[derive(Args)]
pub struct StatsArgs {
    /// Fetch the lightweight counters instead of the full dashboard (the
    /// full dashboard is admin-only)
    #[arg(long)]
    pub quick: bool,
}

// ============================================================================
// Command handler
// ============================================================================

/// Wires parsed commands to [`ApiClient`] calls and renders the results.
pub struct Cli {
    client: ApiClient,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: ApiClient, renderer: TerminalRenderer) -> Self {
        Self { client, renderer }
    }

    pub async fn handle_login(&self, args: LoginArgs) -> Result<()> {
        let session = self.client.login(&args.into()).await?;
        self.renderer.render(&format!(
            "{}",
            OperationStatus::success(format!(
                "Logged in as {} ({})",
                session.user.name,
                session.user.role.as_str()
            ))
        ))
    }

    pub fn handle_logout(&self) -> Result<()> {
        let user = self.client.logout()?;
        self.renderer.render(&format!(
            "{}",
            OperationStatus::success(format!("Logged out {}", user.name))
        ))
    }

    pub fn handle_whoami(&self) -> Result<()> {
        match self.client.current_user()? {
            Some(user) => self.renderer.render(&format!("{user}")),
            None => self.renderer.render(&format!(
                "{}",
                OperationStatus::failure("Not logged in. Run 'inv login' first".to_string())
            )),
        }
    }

    pub async fn handle_product_command(&self, command: ProductCommands) -> Result<()> {
        match command {
            ProductCommands::List { raw } => {
                if raw {
                    let products = self.client.list_products().await?;
                    self.renderer
                        .render(&format!("{}", inventaris_core::Products(products)))
                } else {
                    let views = self.client.list_products_with_availability().await?;
                    self.renderer.render(&format!("{}", Availabilities(views)))
                }
            }
            ProductCommands::Show { id } => {
                let view = self.client.product_availability(id).await?;
                self.renderer.render(&format!("{view}"))
            }
            ProductCommands::Available => {
                let products = self.client.list_available_products().await?;
                self.renderer
                    .render(&format!("{}", inventaris_core::Products(products)))
            }
            ProductCommands::LowStock => {
                let products = self.client.list_low_stock_products().await?;
                self.renderer
                    .render(&format!("{}", inventaris_core::Products(products)))
            }
            ProductCommands::Create(args) => {
                let product = self.client.create_product(&args.into()).await?;
                self.renderer.render(&format!("{}", CreateResult::new(product)))
            }
            ProductCommands::Update(args) => {
                let product = self.client.update_product(&args.into()).await?;
                self.renderer.render(&format!("{}", UpdateResult::new(product)))
            }
            ProductCommands::Delete(args) => {
                if !args.confirm {
                    return self.render_confirm_hint("product", args.id);
                }
                self.client.delete_product(args.id).await?;
                self.renderer
                    .render(&format!("{}", DeleteResult::new("product", args.id)))
            }
        }
    }

    pub async fn handle_category_command(&self, command: CategoryCommands) -> Result<()> {
        match command {
            CategoryCommands::List => {
                let categories = self.client.list_categories().await?;
                self.renderer.render(&format!("{}", Categories(categories)))
            }
            CategoryCommands::Show { id } => {
                let category = self.client.get_category(id).await?;
                self.renderer.render(&format!("{category}"))
            }
            CategoryCommands::Create(args) => {
                let category = self.client.create_category(&args.into()).await?;
                self.renderer.render(&format!("{}", CreateResult::new(category)))
            }
            CategoryCommands::Update(args) => {
                let category = self.client.update_category(&args.into()).await?;
                self.renderer.render(&format!("{}", UpdateResult::new(category)))
            }
            CategoryCommands::Delete(args) => {
                if !args.confirm {
                    return self.render_confirm_hint("category", args.id);
                }
                self.client.delete_category(args.id).await?;
                self.renderer
                    .render(&format!("{}", DeleteResult::new("category", args.id)))
            }
        }
    }

    pub async fn handle_borrowing_command(&self, command: BorrowingCommands) -> Result<()> {
        match command {
            BorrowingCommands::List(args) => {
                let borrowings = self.client.list_borrowings(&args.into()).await?;
                self.renderer.render(&format!("{}", Borrowings(borrowings)))
            }
            BorrowingCommands::Show { id } => {
                let borrowing = self.client.get_borrowing(id).await?;
                self.renderer.render(&format!("{borrowing}"))
            }
            BorrowingCommands::Request(args) => {
                let borrowing = self.client.create_borrowing(&args.into()).await?;
                self.renderer
                    .render(&format!("{}", CreateResult::new(borrowing)))
            }
            BorrowingCommands::Return(args) => {
                let borrowing = self.client.submit_return(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    UpdateResult::with_changes(
                        borrowing,
                        vec!["Return submitted, waiting for verification".to_string()],
                    )
                ))
            }
            BorrowingCommands::Extend(args) => {
                let borrowing = self.client.extend_borrowing(&args.into()).await?;
                self.renderer.render(&format!(
                    "{}",
                    UpdateResult::with_changes(
                        borrowing,
                        vec!["Planned return date extended".to_string()],
                    )
                ))
            }
            BorrowingCommands::Approve(args) => {
                let borrowing = self
                    .client
                    .approve_borrowing(args.id, args.note.as_deref())
                    .await?;
                self.renderer.render(&format!("{}", UpdateResult::new(borrowing)))
            }
            BorrowingCommands::Reject(args) => {
                let borrowing = self
                    .client
                    .reject_borrowing(args.id, args.note.as_deref())
                    .await?;
                self.renderer.render(&format!("{}", UpdateResult::new(borrowing)))
            }
            BorrowingCommands::Handover { id } => {
                let borrowing = self.client.hand_over_borrowing(id).await?;
                self.renderer.render(&format!("{}", UpdateResult::new(borrowing)))
            }
            BorrowingCommands::Verify(args) => {
                let borrowing = self
                    .client
                    .confirm_return(args.id, args.note.as_deref())
                    .await?;
                self.renderer.render(&format!("{}", UpdateResult::new(borrowing)))
            }
            BorrowingCommands::Overdue => {
                let borrowings = self.client.list_overdue_borrowings().await?;
                self.renderer.render(&format!("{}", Borrowings(borrowings)))
            }
            BorrowingCommands::History => {
                let borrowings = self.client.my_borrowing_history().await?;
                self.renderer.render(&format!("{}", Borrowings(borrowings)))
            }
        }
    }

    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::List => {
                let users = self.client.list_users().await?;
                self.renderer.render(&format!("{}", Users(users)))
            }
            UserCommands::Show { id } => {
                let user = self.client.get_user(id).await?;
                self.renderer.render(&format!("{user}"))
            }
            UserCommands::Create(args) => {
                let user = self.client.create_user(&args.into()).await?;
                self.renderer.render(&format!("{}", CreateResult::new(user)))
            }
            UserCommands::Update(args) => {
                let user = self.client.update_user(&args.into()).await?;
                self.renderer.render(&format!("{}", UpdateResult::new(user)))
            }
            UserCommands::Delete(args) => {
                if !args.confirm {
                    return self.render_confirm_hint("user", args.id);
                }
                self.client.delete_user(args.id).await?;
                self.renderer
                    .render(&format!("{}", DeleteResult::new("user", args.id)))
            }
            UserCommands::Profile => {
                let user = self.client.profile().await?;
                self.renderer.render(&format!("{user}"))
            }
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::List => {
                let entries = self.client.list_activity().await?;
                self.renderer.render(&format!("{}", Activities(entries)))
            }
            ActivityCommands::Mine => {
                let entries = self.client.my_activity().await?;
                self.renderer.render(&format!("{}", Activities(entries)))
            }
            ActivityCommands::Row { table, id } => {
                let entries = self.client.activity_for_row(&table, id).await?;
                self.renderer.render(&format!("{}", Activities(entries)))
            }
        }
    }

    pub async fn handle_report_command(&self, command: ReportCommands) -> Result<()> {
        match command {
            ReportCommands::Preview(args) => {
                let preview = self.client.preview_report(&(&args).into()).await?;
                let json = serde_json::to_string_pretty(&preview)
                    .context("Failed to format report preview")?;
                self.renderer.render(&json)
            }
            ReportCommands::Download { report, output } => {
                let download = self.client.download_report(&(&report).into()).await?;
                let path = output.unwrap_or_else(|| PathBuf::from(&download.file_name));
                std::fs::write(&path, &download.bytes)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success(format!(
                        "Saved report ({} bytes) to {}",
                        download.bytes.len(),
                        path.display()
                    ))
                ))
            }
        }
    }

    pub async fn handle_stats(&self, args: StatsArgs) -> Result<()> {
        if args.quick {
            let stats = self.client.quick_stats().await?;
            let json =
                serde_json::to_string_pretty(&stats).context("Failed to format statistics")?;
            self.renderer.render(&json)
        } else {
            let stats = self.client.dashboard_stats().await?;
            self.renderer.render(&format!("{stats}"))
        }
    }

    fn render_confirm_hint(&self, resource: &str, id: u64) -> Result<()> {
        self.renderer.render(&format!(
            "{}",
            OperationStatus::failure(format!(
                "Deleting {resource} {id} is permanent. Re-run with --confirm to proceed"
            ))
        ))
    }
}
