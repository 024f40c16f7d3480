//! Content service
//!
//! Admin-managed storefront content: banners and announcements.

use crate::audit::EntityType;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{
    Announcement, AnnouncementId, Audience, Banner, BannerId, BannerPlacement,
};
use crate::storage::Storage;

/// Service for banners and announcements
pub struct ContentService<'a> {
    storage: &'a Storage,
}

impl<'a> ContentService<'a> {
    /// Create a new content service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    // Banners

    /// Create a banner
    pub fn create_banner(
        &self,
        title: &str,
        image_ref: &str,
        link: &str,
        placement: BannerPlacement,
        sort_order: i32,
    ) -> TrailheadResult<Banner> {
        let mut banner = Banner::new(title.trim(), image_ref.trim(), placement);
        banner.link = link.trim().to_string();
        banner.sort_order = sort_order;

        banner.validate().map_err(TrailheadError::Validation)?;

        self.storage.banners.upsert(banner.clone())?;
        self.storage.banners.save()?;

        self.storage.log_create(
            EntityType::Banner,
            banner.id.to_string(),
            Some(banner.title.clone()),
            &banner,
        )?;

        Ok(banner)
    }

    /// List all banners
    pub fn list_banners(&self) -> TrailheadResult<Vec<Banner>> {
        self.storage.banners.get_all()
    }

    /// List the live banners for one placement
    pub fn live_banners(&self, placement: BannerPlacement) -> TrailheadResult<Vec<Banner>> {
        self.storage.banners.get_live(placement)
    }

    /// Toggle whether a banner is live
    pub fn set_banner_active(&self, id: BannerId, active: bool) -> TrailheadResult<Banner> {
        let before = self
            .storage
            .banners
            .get(id)?
            .ok_or_else(|| TrailheadError::NotFound {
                entity_type: "Banner",
                identifier: id.to_string(),
            })?;

        let mut banner = before.clone();
        banner.active = active;
        self.storage.banners.upsert(banner.clone())?;
        self.storage.banners.save()?;

        self.storage.log_update(
            EntityType::Banner,
            banner.id.to_string(),
            Some(banner.title.clone()),
            &before,
            &banner,
        )?;

        Ok(banner)
    }

    /// Delete a banner
    pub fn delete_banner(&self, id: BannerId) -> TrailheadResult<()> {
        let banner = self
            .storage
            .banners
            .get(id)?
            .ok_or_else(|| TrailheadError::NotFound {
                entity_type: "Banner",
                identifier: id.to_string(),
            })?;

        self.storage.banners.delete(id)?;
        self.storage.banners.save()?;

        self.storage.log_delete(
            EntityType::Banner,
            banner.id.to_string(),
            Some(banner.title.clone()),
            &banner,
        )?;

        Ok(())
    }

    // Announcements

    /// Draft a new announcement
    pub fn draft_announcement(
        &self,
        title: &str,
        body: &str,
        audience: Audience,
    ) -> TrailheadResult<Announcement> {
        let announcement = Announcement::new(title.trim(), body.trim(), audience);
        announcement.validate().map_err(TrailheadError::Validation)?;

        self.storage.announcements.upsert(announcement.clone())?;
        self.storage.announcements.save()?;

        self.storage.log_create(
            EntityType::Announcement,
            announcement.id.to_string(),
            Some(announcement.title.clone()),
            &announcement,
        )?;

        Ok(announcement)
    }

    /// Publish a drafted announcement
    pub fn publish_announcement(&self, id: AnnouncementId) -> TrailheadResult<Announcement> {
        let before = self
            .storage
            .announcements
            .get(id)?
            .ok_or_else(|| TrailheadError::NotFound {
                entity_type: "Announcement",
                identifier: id.to_string(),
            })?;

        let mut announcement = before.clone();
        announcement.publish();
        self.storage.announcements.upsert(announcement.clone())?;
        self.storage.announcements.save()?;

        self.storage.log_update(
            EntityType::Announcement,
            announcement.id.to_string(),
            Some(announcement.title.clone()),
            &before,
            &announcement,
        )?;

        Ok(announcement)
    }

    /// List announcements, drafts included
    pub fn list_announcements(&self) -> TrailheadResult<Vec<Announcement>> {
        self.storage.announcements.get_all()
    }

    /// List the published announcements an audience can see
    pub fn published_announcements(
        &self,
        audience: Option<Audience>,
    ) -> TrailheadResult<Vec<Announcement>> {
        self.storage.announcements.get_published(audience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrailheadPaths;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrailheadPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_banner_lifecycle() {
        let (_temp_dir, storage) = test_storage();
        let service = ContentService::new(&storage);

        let banner = service
            .create_banner("Monsoon Sale", "banners/monsoon.png", "/sale", BannerPlacement::Home, 0)
            .unwrap();
        assert_eq!(service.live_banners(BannerPlacement::Home).unwrap().len(), 1);

        service.set_banner_active(banner.id, false).unwrap();
        assert!(service.live_banners(BannerPlacement::Home).unwrap().is_empty());

        service.delete_banner(banner.id).unwrap();
        assert!(service.list_banners().unwrap().is_empty());
    }

    #[test]
    fn test_announcement_publish_flow() {
        let (_temp_dir, storage) = test_storage();
        let service = ContentService::new(&storage);

        let ann = service
            .draft_announcement("Season opening", "Bookings open", Audience::Customers)
            .unwrap();
        assert!(service.published_announcements(None).unwrap().is_empty());

        service.publish_announcement(ann.id).unwrap();
        let published = service
            .published_announcements(Some(Audience::Customers))
            .unwrap();
        assert_eq!(published.len(), 1);
    }

    #[test]
    fn test_empty_banner_title_rejected() {
        let (_temp_dir, storage) = test_storage();
        let service = ContentService::new(&storage);

        let err = service
            .create_banner("  ", "banners/x.png", "", BannerPlacement::Home, 0)
            .unwrap_err();
        assert!(err.is_validation());
    }
}
