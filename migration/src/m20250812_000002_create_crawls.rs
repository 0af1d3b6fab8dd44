use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create crawls table. The marketing columns are editor-owned and
        // stay NULL until filled in from the CMS side.
        manager
            .create_table(
                Table::create()
                    .table(Crawls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Crawls::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Crawls::EventbriteId).string())
                    .col(ColumnDef::new(Crawls::Name).string())
                    .col(ColumnDef::new(Crawls::Slug).string())
                    .col(ColumnDef::new(Crawls::ShortDescription).text())
                    .col(ColumnDef::new(Crawls::Status).string().not_null())
                    .col(ColumnDef::new(Crawls::EventDateStart).timestamp_with_time_zone())
                    .col(ColumnDef::new(Crawls::EventDateEnd).timestamp_with_time_zone())
                    .col(ColumnDef::new(Crawls::EventDateStart2).timestamp_with_time_zone())
                    .col(ColumnDef::new(Crawls::EventDateEnd2).timestamp_with_time_zone())
                    .col(ColumnDef::new(Crawls::EventDateStart3).timestamp_with_time_zone())
                    .col(ColumnDef::new(Crawls::EventDateEnd3).timestamp_with_time_zone())
                    .col(ColumnDef::new(Crawls::CrawlImage1).string())
                    .col(ColumnDef::new(Crawls::CrawlImage1Alt).string())
                    .col(ColumnDef::new(Crawls::CrawlImage2).string())
                    .col(ColumnDef::new(Crawls::CrawlImage2Alt).string())
                    .col(ColumnDef::new(Crawls::CrawlImage3).string())
                    .col(ColumnDef::new(Crawls::CrawlImage3Alt).string())
                    .col(ColumnDef::new(Crawls::CrawlImage4).string())
                    .col(ColumnDef::new(Crawls::CrawlImage4Alt).string())
                    .col(ColumnDef::new(Crawls::CrawlImageVerticalUrl).string())
                    .col(ColumnDef::new(Crawls::CrawlImageVerticalAlt).string())
                    .col(ColumnDef::new(Crawls::AltName).string())
                    .col(ColumnDef::new(Crawls::City).string())
                    .col(ColumnDef::new(Crawls::Collection).string())
                    .col(ColumnDef::new(Crawls::Theme).string())
                    .col(ColumnDef::new(Crawls::Neighborhood).string())
                    .col(ColumnDef::new(Crawls::Price).string())
                    .col(ColumnDef::new(Crawls::CheckinVenue1).string())
                    .col(ColumnDef::new(Crawls::KeywordsH2).text())
                    .col(ColumnDef::new(Crawls::KeywordsParagraph).text())
                    .col(ColumnDef::new(Crawls::SeoTitle).string())
                    .col(ColumnDef::new(Crawls::SeoDescription).text())
                    .col(
                        ColumnDef::new(Crawls::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Crawls::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Crawls::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Crawls {
    Table,
    Id,
    EventbriteId,
    Name,
    Slug,
    ShortDescription,
    Status,
    EventDateStart,
    EventDateEnd,
    EventDateStart2,
    EventDateEnd2,
    EventDateStart3,
    EventDateEnd3,
    CrawlImage1,
    CrawlImage1Alt,
    CrawlImage2,
    CrawlImage2Alt,
    CrawlImage3,
    CrawlImage3Alt,
    CrawlImage4,
    CrawlImage4Alt,
    CrawlImageVerticalUrl,
    CrawlImageVerticalAlt,
    AltName,
    City,
    Collection,
    Theme,
    Neighborhood,
    Price,
    CheckinVenue1,
    KeywordsH2,
    KeywordsParagraph,
    SeoTitle,
    SeoDescription,
    CreatedAt,
    UpdatedAt,
}
